// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vdrs - library behind the `vendas` CLI.
//!
//! This crate wires the `produtos`/`vendas` fixture from `vd_core` to a
//! command line: loading the tables into SQLite, printing the fixture as a
//! SQL script, and reporting on sales before and after NULL treatment.
//!
//! # Main Components
//!
//! - [`Cli`] - Argument parser and [`Command`] variants
//! - [`config`] - `vendas.toml` loading and database location
//! - [`Error`] - Error types for all commands
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = vdrs::Cli::parse_from(["vendas", "--db", ":memory:", "metrics"]);
//! vdrs::run(cli)?;
//! ```

mod cli;
mod commands;
mod display;
mod env;
mod logging;
mod schema;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputArgs, OutputFormat, SchemaCommand};
pub use config::{Config, Settings};
pub use error::{Error, Result};
pub use logging::setup_logging;

use std::path::Path;

/// Execute a parsed command line, resolving configuration from the current
/// directory.
pub fn run(cli: Cli) -> Result<()> {
    let dir = std::env::current_dir()?;
    run_in(&dir, cli)
}

/// Execute a parsed command line, resolving configuration from `dir`.
pub fn run_in(dir: &Path, cli: Cli) -> Result<()> {
    let explicit = cli.config.as_deref().map(Path::new);
    let settings = config::resolve(dir, explicit, cli.db.as_deref())?;
    tracing::debug!("database: {}", settings.db.display());

    match cli.command {
        Command::Load { atomic, script } => {
            let script = script.map(|path| dir.join(path));
            commands::load::run(&settings, atomic, script.as_deref())
        }
        Command::Script => commands::script::run(),
        Command::Report { clean, output } => commands::report::run(&settings, clean, output.format),
        Command::Nulls { output } => commands::nulls::run(&settings, output.format),
        Command::Metrics { top, output } => commands::metrics::run(&settings, top, output.format),
        Command::Columns { output } => commands::columns::run(output.format),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Config => commands::config::run(&settings),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
