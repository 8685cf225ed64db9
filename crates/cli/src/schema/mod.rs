// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! The same structs are serialized by the commands and fed to schemars by
//! `vendas schema`, so the published schema cannot drift from the output.

use schemars::JsonSchema;
use serde::Serialize;

use vd_core::{CleanLine, Metrics, NullCounts, SaleLine};

/// JSON output of `vendas report -o json`.
#[derive(JsonSchema, Serialize)]
pub struct ReportOutputJson {
    /// One entry per sale, ordered by sale id. Absent values are `null`.
    pub lines: Vec<SaleLine>,
}

/// JSON output of `vendas report --clean -o json`.
#[derive(JsonSchema, Serialize)]
pub struct CleanReportOutputJson {
    /// One entry per sale after NULL treatment.
    pub lines: Vec<CleanLine>,
}

/// JSON output of `vendas nulls -o json`.
#[derive(JsonSchema, Serialize)]
pub struct NullsOutputJson {
    /// Number of report lines inspected.
    pub rows: usize,
    /// Absent values per column before cleaning.
    pub raw: NullCounts,
    /// Absent values per column after cleaning.
    pub cleaned: NullCounts,
}

/// JSON output of `vendas metrics -o json`.
#[derive(JsonSchema, Serialize)]
pub struct MetricsOutputJson {
    /// Ranking length used for top products and top days.
    pub top_n: usize,
    #[serde(flatten)]
    pub metrics: Metrics,
}
