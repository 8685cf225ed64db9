// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};

pub use args::OutputArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "vendas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Product catalog and sales log fixture with NULL-aware sales reports")]
#[command(
    long_about = "Product catalog and sales log fixture with NULL-aware sales reports.\n\n\
    Loads the fixed produtos/vendas tables into SQLite, then reports on sales \
    before and after missing values are treated."
)]
pub struct Cli {
    /// Read configuration from <path> instead of ./vendas.toml
    #[arg(short = 'c', long = "config", global = true, value_name = "path")]
    pub config: Option<String>,

    /// Database file (overrides config); ':memory:' loads a fresh copy per run
    #[arg(long = "db", global = true, value_name = "path")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Drop, recreate and load the produtos and vendas tables
    #[command(after_help = "\
Examples:
  vendas load                      Load the fixed fixture into vendas.db
  vendas load --atomic             Roll back everything if any row fails
  vendas load --script dump.sql    Execute a SQL script instead of the fixture")]
    Load {
        /// Run the whole load in one transaction
        #[arg(long)]
        atomic: bool,

        /// Execute this SQL script instead of loading the built-in fixture
        #[arg(long, value_name = "FILE")]
        script: Option<String>,
    },

    /// Print the fixture as a standalone SQL script
    Script,

    /// Show every sale joined with its product
    #[command(after_help = "\
Examples:
  vendas report                    Raw lines, absent values shown as NULL
  vendas report --clean            Lines after NULL treatment
  vendas report -o json            Raw lines as JSON")]
    Report {
        /// Apply NULL treatment before printing
        #[arg(long)]
        clean: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Count absent values per column, before and after cleaning
    Nulls {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show revenue, units sold and rankings
    Metrics {
        /// Length of the product and day rankings (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        top: Option<u32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the columns of produtos and vendas with their types and keys
    Columns {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Output JSON Schema for commands with JSON output
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'vendas report -o json'
    Report,
    /// Output JSON Schema for 'vendas report --clean -o json'
    CleanReport,
    /// Output JSON Schema for 'vendas nulls -o json'
    Nulls,
    /// Output JSON Schema for 'vendas metrics -o json'
    Metrics,
}
