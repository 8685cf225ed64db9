// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use vdrs::Cli;

fn main() {
    let cli = Cli::parse();
    vdrs::setup_logging();
    if let Err(e) = vdrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
