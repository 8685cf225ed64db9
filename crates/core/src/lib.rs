// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vd-core: product catalog and sales log fixture.
//!
//! This crate defines the `produtos` and `vendas` tables, the fixed rows that
//! populate them, and the join report, NULL cleaning and indicators computed
//! on top of them. It is shared by the `vendas` CLI and its tests.

pub mod clean;
pub mod db;
pub mod error;
pub mod metrics;
pub mod model;
pub mod report;
pub mod schema;
pub mod script;
pub mod seed;

pub use clean::{CleanLine, FillDefaults, NullCounts};
pub use db::{Counts, Database, LoadMode};
pub use error::{Error, Rejection, Result};
pub use metrics::Metrics;
pub use model::{Product, Sale};
pub use report::SaleLine;
pub use seed::Fixture;
