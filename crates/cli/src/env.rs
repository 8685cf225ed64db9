// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `VENDAS_DB` if set and non-empty.
pub fn database() -> Option<PathBuf> {
    non_empty(vars::VENDAS_DB).map(PathBuf::from)
}

/// Returns the value of `VENDAS_CONFIG` if set and non-empty.
pub fn config_file() -> Option<PathBuf> {
    non_empty(vars::VENDAS_CONFIG).map(PathBuf::from)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
