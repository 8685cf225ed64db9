// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config command: prints the effective configuration.

use crate::config::Settings;
use crate::error::Result;

pub fn run(settings: &Settings) -> Result<()> {
    print!("{}", render(settings)?);
    Ok(())
}

pub(crate) fn render(settings: &Settings) -> Result<String> {
    let source = match &settings.source {
        Some(path) => path.display().to_string(),
        None => "defaults".to_string(),
    };
    let mut out = format!("# source: {}\n# database: {}\n", source, settings.db.display());
    out.push_str(&settings.config.to_toml()?);
    Ok(out)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
