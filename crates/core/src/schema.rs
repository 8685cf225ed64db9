// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Table definitions for the product catalog and the sales log.
//!
//! The drop is unconditional: whatever state the tables held before is
//! discarded. Sales go first so the drop never trips the foreign key.

use rusqlite::Connection;
use serde::Serialize;

use crate::error::Result;

/// Drop both tables, child first.
pub const DROP: &str = "\
DROP TABLE IF EXISTS vendas;
DROP TABLE IF EXISTS produtos;
";

/// Create both tables, parent first.
pub const CREATE: &str = "\
CREATE TABLE produtos (
    id_produto INTEGER PRIMARY KEY,
    nome_produto TEXT,
    categoria TEXT,
    preco_unitario DECIMAL(10, 2)
);

CREATE TABLE vendas (
    id_venda INTEGER PRIMARY KEY,
    id_produto INTEGER,
    quantidade INTEGER,
    data_venda DATE NOT NULL,
    desconto DECIMAL(10, 2),
    FOREIGN KEY (id_produto) REFERENCES produtos(id_produto)
);
";

/// Table holding the product catalog.
pub const PRODUCTS_TABLE: &str = "produtos";
/// Table holding the sales log.
pub const SALES_TABLE: &str = "vendas";

/// Drop and recreate both tables, leaving them empty.
pub fn define(conn: &Connection) -> Result<()> {
    tracing::debug!("dropping {SALES_TABLE} and {PRODUCTS_TABLE}");
    conn.execute_batch(DROP)?;
    tracing::debug!("creating {PRODUCTS_TABLE} and {SALES_TABLE}");
    conn.execute_batch(CREATE)?;
    Ok(())
}

/// Declared type of a column, as downstream consumers see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    Text,
    Decimal,
    Date,
}

impl ColumnType {
    /// The type name SQLite reports through `pragma_table_info`.
    pub fn declared(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
            ColumnType::Decimal => "DECIMAL(10, 2)",
            ColumnType::Date => "DATE",
        }
    }
}

/// Key role of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyRole {
    None,
    Primary,
    /// References the named `table(column)`.
    Foreign(&'static str, &'static str),
}

/// One row of the column contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub table: &'static str,
    pub column: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
    pub key: KeyRole,
}

const fn col(
    table: &'static str,
    column: &'static str,
    column_type: ColumnType,
    nullable: bool,
    key: KeyRole,
) -> ColumnSpec {
    ColumnSpec {
        table,
        column,
        column_type,
        nullable,
        key,
    }
}

const COLUMNS: [ColumnSpec; 9] = [
    col(PRODUCTS_TABLE, "id_produto", ColumnType::Integer, false, KeyRole::Primary),
    col(PRODUCTS_TABLE, "nome_produto", ColumnType::Text, true, KeyRole::None),
    col(PRODUCTS_TABLE, "categoria", ColumnType::Text, true, KeyRole::None),
    col(PRODUCTS_TABLE, "preco_unitario", ColumnType::Decimal, true, KeyRole::None),
    col(SALES_TABLE, "id_venda", ColumnType::Integer, false, KeyRole::Primary),
    col(
        SALES_TABLE,
        "id_produto",
        ColumnType::Integer,
        true,
        KeyRole::Foreign(PRODUCTS_TABLE, "id_produto"),
    ),
    col(SALES_TABLE, "quantidade", ColumnType::Integer, true, KeyRole::None),
    col(SALES_TABLE, "data_venda", ColumnType::Date, false, KeyRole::None),
    col(SALES_TABLE, "desconto", ColumnType::Decimal, true, KeyRole::None),
];

/// The fixed column contract of both tables, in declaration order.
pub fn columns() -> &'static [ColumnSpec] {
    &COLUMNS
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
