// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Script command: prints the fixture as SQL.

use vd_core::{script, Fixture};

use crate::error::Result;

pub fn run() -> Result<()> {
    print!("{}", script::render(&Fixture::standard()));
    Ok(())
}
