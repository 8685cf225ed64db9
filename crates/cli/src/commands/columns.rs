// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Columns command: prints the fixed column contract of both tables.

use serde::Serialize;
use vd_core::schema::{self, ColumnSpec, KeyRole};

use crate::cli::OutputFormat;
use crate::error::Result;

#[derive(Serialize)]
struct ColumnsOutputJson {
    columns: &'static [ColumnSpec],
}

pub fn run(format: OutputFormat) -> Result<()> {
    println!("{}", render(format)?);
    Ok(())
}

fn key(role: &KeyRole) -> String {
    match role {
        KeyRole::None => String::new(),
        KeyRole::Primary => "PK".to_string(),
        KeyRole::Foreign(table, column) => format!("FK {table}({column})"),
    }
}

pub(crate) fn render(format: OutputFormat) -> Result<String> {
    let columns = schema::columns();
    let output = match format {
        OutputFormat::Text => {
            let mut out = vec![format!(
                "{:<10}{:<16}{:<16}{:<6}{}",
                "tabela", "coluna", "tipo", "nulo", "chave"
            )];
            for c in columns {
                let nullable = if c.nullable { "sim" } else { "não" };
                out.push(
                    format!(
                        "{:<10}{:<16}{:<16}{:<6}{}",
                        c.table,
                        c.column,
                        c.column_type.declared(),
                        nullable,
                        key(&c.key)
                    )
                    .trim_end()
                    .to_string(),
                );
            }
            out.join("\n")
        }
        OutputFormat::Json => serde_json::to_string_pretty(&ColumnsOutputJson { columns })?,
    };
    Ok(output)
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
