// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Metrics command implementation.

use vd_core::{clean, metrics, Database, FillDefaults};

use super::open_db;
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::display;
use crate::error::Result;
use crate::schema::MetricsOutputJson;

pub fn run(settings: &Settings, top: Option<u32>, format: OutputFormat) -> Result<()> {
    let db = open_db(settings)?;
    let fill = settings.config.clean.fill();
    let top_n = top.map_or(settings.config.metrics.top_n, |n| n as usize);
    println!("{}", render(&db, &fill, top_n, format)?);
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// Indicators are always computed on cleaned lines.
pub(crate) fn render(
    db: &Database,
    fill: &FillDefaults,
    top_n: usize,
    format: OutputFormat,
) -> Result<String> {
    let lines = clean::clean(&db.sale_lines()?, fill);
    let metrics = metrics::compute(&lines, top_n);

    let output = match format {
        OutputFormat::Text => display::metrics_text(&metrics).join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&MetricsOutputJson { top_n, metrics })?,
    };
    Ok(output)
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
