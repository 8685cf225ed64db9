// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Standalone SQL script form of a fixture.
//!
//! [`render`] produces a script that any SQLite shell can run to reach the
//! same state as [`crate::Database::rebuild`]. [`execute`] runs such a script
//! (or any other) as a single batch.

use std::fmt::Write;

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::model::{Product, Sale};
use crate::schema;
use crate::seed::Fixture;

/// Quote a text literal, doubling embedded single quotes.
fn text(value: Option<&str>) -> String {
    match value {
        Some(s) => format!("'{}'", s.replace('\'', "''")),
        None => "NULL".to_string(),
    }
}

fn decimal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "NULL".to_string(),
    }
}

fn integer(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "NULL".to_string(),
    }
}

fn product_tuple(p: &Product) -> String {
    format!(
        "({}, {}, {}, {})",
        p.id,
        text(p.name.as_deref()),
        text(p.category.as_deref()),
        decimal(p.unit_price)
    )
}

fn sale_tuple(s: &Sale) -> String {
    format!(
        "({}, {}, {}, '{}', {})",
        s.id,
        integer(s.product_id),
        integer(s.quantity),
        s.date_str(),
        decimal(s.discount)
    )
}

/// Append one multi-row INSERT, or nothing when there are no rows.
fn push_insert(out: &mut String, head: &str, tuples: Vec<String>) {
    if tuples.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{head} VALUES");
    let _ = writeln!(out, "{};", tuples.join(",\n"));
}

/// Render the drop, create and insert sequence for `fixture`.
pub fn render(fixture: &Fixture) -> String {
    let mut out = String::new();
    out.push_str(schema::DROP);
    out.push('\n');
    out.push_str(schema::CREATE);

    push_insert(
        &mut out,
        "INSERT INTO produtos (id_produto, nome_produto, categoria, preco_unitario)",
        fixture.products.iter().map(product_tuple).collect(),
    );
    push_insert(
        &mut out,
        "INSERT INTO vendas (id_venda, id_produto, quantidade, data_venda, desconto)",
        fixture.sales.iter().map(sale_tuple).collect(),
    );
    out
}

/// First keyword of every statement in `sql`, uppercased.
///
/// Quoted text and comments are skipped, so a `;` inside them does not start
/// a new statement.
fn leading_keywords(sql: &str) -> Vec<String> {
    let mut keywords = Vec::new();
    let mut at_start = true;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' | '`' => {
                // a doubled quote closes and reopens the literal
                for q in chars.by_ref() {
                    if q == c {
                        break;
                    }
                }
                at_start = false;
            }
            '[' => {
                for q in chars.by_ref() {
                    if q == ']' {
                        break;
                    }
                }
                at_start = false;
            }
            '-' if chars.peek() == Some(&'-') => {
                for q in chars.by_ref() {
                    if q == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = ' ';
                for q in chars.by_ref() {
                    if prev == '*' && q == '/' {
                        break;
                    }
                    prev = q;
                }
            }
            ';' => at_start = true,
            c if c.is_whitespace() => {}
            c if at_start && c.is_ascii_alphabetic() => {
                let mut word = c.to_ascii_uppercase().to_string();
                while let Some(&n) = chars.peek() {
                    if !(n.is_ascii_alphanumeric() || n == '_') {
                        break;
                    }
                    word.push(n.to_ascii_uppercase());
                    chars.next();
                }
                keywords.push(word);
                at_start = false;
            }
            _ => at_start = false,
        }
    }
    keywords
}

/// Whether `sql` opens, commits or rolls back a transaction itself, as
/// `sqlite3 .dump` output does.
///
/// `END` alone is not counted: it also closes trigger bodies.
pub fn controls_transaction(sql: &str) -> bool {
    leading_keywords(sql)
        .iter()
        .any(|k| matches!(k.as_str(), "BEGIN" | "COMMIT" | "ROLLBACK"))
}

/// Run a SQL script as one batch.
///
/// Statements run in order until one fails; earlier statements stay applied.
/// Text that opens with `<` (an HTML page in place of the script) is refused
/// before anything runs.
pub fn execute(conn: &Connection, sql: &str) -> Result<()> {
    if sql.trim_start().starts_with('<') {
        return Err(Error::NotSqlScript);
    }
    tracing::info!("executing script ({} bytes)", sql.len());
    conn.execute_batch(sql)?;
    Ok(())
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
