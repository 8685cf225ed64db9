// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Load command implementation.

use std::fs;
use std::path::Path;

use vd_core::{Counts, Database, Fixture, LoadMode};

use crate::config::{DbLocation, Settings};
use crate::error::{Error, Result};

/// What to load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source<'a> {
    /// The built-in 15 products and 30 sales.
    Fixture,
    /// SQL text read from a script file.
    Script(&'a str),
}

/// `script` is read as given; the caller resolves relative paths.
pub fn run(settings: &Settings, atomic: bool, script: Option<&Path>) -> Result<()> {
    let mode = if atomic {
        LoadMode::Atomic
    } else {
        settings.config.load.mode
    };

    let sql = match script {
        Some(path) => Some(fs::read_to_string(path).map_err(|source| Error::ScriptRead {
            path: path.to_path_buf(),
            source,
        })?),
        None => None,
    };
    let source = match &sql {
        Some(sql) => Source::Script(sql),
        None => Source::Fixture,
    };

    let mut db = match &settings.db {
        DbLocation::Memory => Database::open_in_memory()?,
        DbLocation::File(path) => Database::open(path)?,
    };
    let counts = run_impl(&mut db, source, mode)?;

    println!(
        "Loaded {} products and {} sales into {} ({} mode)",
        counts.products,
        counts.sales,
        settings.db.display(),
        mode
    );
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, source: Source<'_>, mode: LoadMode) -> Result<Counts> {
    let counts = match source {
        Source::Fixture => db.rebuild(&Fixture::standard(), mode)?,
        Source::Script(sql) => db.run_script(sql, mode)?,
    };
    tracing::info!("loaded {} products, {} sales", counts.products, counts.sales);
    Ok(counts)
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
