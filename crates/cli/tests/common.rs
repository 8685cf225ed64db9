// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `vendas` binary, isolated from the caller's environment.
pub fn vendas() -> Command {
    let mut cmd = cargo_bin_cmd!("vendas");
    cmd.env_remove("VENDAS_DB")
        .env_remove("VENDAS_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create a temp directory with the fixture loaded into vendas.db
pub fn loaded_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    vendas()
        .arg("load")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Run a command in `temp` and return its stdout.
pub fn stdout(temp: &TempDir, args: &[&str]) -> String {
    let output = vendas()
        .args(args)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "vendas {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Run a command in `temp` and parse its stdout as JSON.
pub fn json(temp: &TempDir, args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&stdout(temp, args)).unwrap()
}
