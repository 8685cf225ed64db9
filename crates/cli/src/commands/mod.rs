// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod columns;
pub mod config;
pub mod load;
pub mod metrics;
pub mod nulls;
pub mod report;
pub mod schema;
pub mod script;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use vd_core::{Database, Fixture};

use crate::config::{DbLocation, Settings};
use crate::error::{Error, Result};

/// Open the configured database for reading.
///
/// An in-memory store is loaded with the built-in fixture first, so every
/// reporting command works without a prior `vendas load`. A file store must
/// already hold the tables.
pub fn open_db(settings: &Settings) -> Result<Database> {
    match &settings.db {
        DbLocation::Memory => {
            let mut db = Database::open_in_memory()?;
            db.rebuild(&Fixture::standard(), settings.config.load.mode)?;
            Ok(db)
        }
        DbLocation::File(path) => {
            if !path.is_file() {
                return Err(Error::NotLoaded(settings.db.display()));
            }
            let db = Database::open(path)?;
            if !db.table_exists(vd_core::schema::SALES_TABLE)?
                || !db.table_exists(vd_core::schema::PRODUCTS_TABLE)?
            {
                return Err(Error::NotLoaded(settings.db.display()));
            }
            Ok(db)
        }
    }
}
