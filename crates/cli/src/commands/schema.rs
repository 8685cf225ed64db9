// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{CleanReportOutputJson, MetricsOutputJson, NullsOutputJson, ReportOutputJson};

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    println!("{}", render(cmd)?);
    Ok(())
}

pub(crate) fn render(cmd: SchemaCommand) -> Result<String> {
    let schema = match cmd {
        SchemaCommand::Report => schema_for!(ReportOutputJson),
        SchemaCommand::CleanReport => schema_for!(CleanReportOutputJson),
        SchemaCommand::Nulls => schema_for!(NullsOutputJson),
        SchemaCommand::Metrics => schema_for!(MetricsOutputJson),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
