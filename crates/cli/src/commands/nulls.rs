// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Nulls command implementation.
//!
//! Shows how many values each report column is missing, before and after
//! cleaning.

use vd_core::{clean, Database, FillDefaults, NullCounts};

use super::open_db;
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::display;
use crate::error::Result;
use crate::schema::NullsOutputJson;

pub fn run(settings: &Settings, format: OutputFormat) -> Result<()> {
    let db = open_db(settings)?;
    let fill = settings.config.clean.fill();
    println!("{}", render(&db, &fill, format)?);
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn render(db: &Database, fill: &FillDefaults, format: OutputFormat) -> Result<String> {
    let lines = db.sale_lines()?;
    let raw = NullCounts::of_raw(&lines);
    let cleaned = NullCounts::of_clean(&clean::clean(&lines, fill));

    let output = match format {
        OutputFormat::Text => display::null_table(&raw, &cleaned).join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&NullsOutputJson {
            rows: lines.len(),
            raw,
            cleaned,
        })?,
    };
    Ok(output)
}

#[cfg(test)]
#[path = "nulls_tests.rs"]
mod tests;
