// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use vd_core::{clean, Database, FillDefaults};

use super::open_db;
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::display;
use crate::error::Result;
use crate::schema::{CleanReportOutputJson, ReportOutputJson};

pub fn run(settings: &Settings, cleaned: bool, format: OutputFormat) -> Result<()> {
    let db = open_db(settings)?;
    let fill = settings.config.clean.fill();
    println!("{}", render(&db, cleaned, &fill, format)?);
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn render(
    db: &Database,
    cleaned: bool,
    fill: &FillDefaults,
    format: OutputFormat,
) -> Result<String> {
    let lines = db.sale_lines()?;
    tracing::debug!("report has {} lines", lines.len());

    let output = match (cleaned, format) {
        (false, OutputFormat::Text) => display::raw_table(&lines).join("\n"),
        (false, OutputFormat::Json) => serde_json::to_string_pretty(&ReportOutputJson { lines })?,
        (true, format) => {
            let lines = clean::clean(&lines, fill);
            match format {
                OutputFormat::Text => display::clean_table(&lines).join("\n"),
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&CleanReportOutputJson { lines })?
                }
            }
        }
    };
    Ok(output)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
