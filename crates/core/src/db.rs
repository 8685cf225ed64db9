// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed store for the product catalog and the sales log.
//!
//! The [`Database`] struct owns the full lifecycle of both tables: every
//! rebuild drops them, recreates them and loads a fixture.

use std::fmt;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Product, Sale};
use crate::report::{self, parse_date, SaleLine};
use crate::schema;
use crate::script;
use crate::seed::{self, Fixture};

/// How a rebuild treats failures part way through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    /// Statements apply one by one; a failure keeps everything before it.
    #[default]
    Statement,
    /// The whole rebuild is one transaction; a failure keeps the prior state.
    Atomic,
}

impl LoadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadMode::Statement => "statement",
            LoadMode::Atomic => "atomic",
        }
    }
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row counts of both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub products: i64,
    pub sales: i64,
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        unit_price: row.get(3)?,
    })
}

/// SQLite database connection with catalog and sales operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating the file if needed.
    ///
    /// Tables are not created here; call [`Database::rebuild`] for that.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(Database { conn })
    }

    /// Open an in-memory database (for testing and one-shot reports).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Database { conn })
    }

    /// Drop and recreate both tables, then load `fixture`.
    pub fn rebuild(&mut self, fixture: &Fixture, mode: LoadMode) -> Result<Counts> {
        tracing::info!(
            "rebuilding with {} products and {} sales ({mode})",
            fixture.products.len(),
            fixture.sales.len()
        );
        match mode {
            LoadMode::Statement => {
                schema::define(&self.conn)?;
                seed::load(&self.conn, fixture)?;
            }
            LoadMode::Atomic => {
                let tx = self.conn.transaction()?;
                schema::define(&tx)?;
                seed::load(&tx, fixture)?;
                tx.commit()?;
            }
        }
        self.counts()
    }

    /// Run a SQL script against this database.
    ///
    /// In atomic mode a script with its own `BEGIN ... COMMIT` runs as is, and
    /// a transaction it leaves open after a failure is rolled back.
    pub fn run_script(&mut self, sql: &str, mode: LoadMode) -> Result<Counts> {
        match mode {
            LoadMode::Statement => script::execute(&self.conn, sql)?,
            LoadMode::Atomic if script::controls_transaction(sql) => {
                tracing::info!("script manages its own transaction");
                script::execute(&self.conn, sql).inspect_err(|_| self.abandon_transaction())?;
            }
            LoadMode::Atomic => {
                let tx = self.conn.transaction()?;
                script::execute(&tx, sql)?;
                tx.commit()?;
            }
        }
        self.counts()
    }

    fn abandon_transaction(&self) {
        if self.conn.is_autocommit() {
            return;
        }
        match self.conn.execute_batch("ROLLBACK") {
            Ok(()) => tracing::info!("rolled back script transaction"),
            Err(e) => tracing::warn!("rollback failed: {e}"),
        }
    }

    /// Number of rows in each table.
    pub fn counts(&self) -> Result<Counts> {
        let products = self.count("SELECT COUNT(*) FROM produtos")?;
        let sales = self.count("SELECT COUNT(*) FROM vendas")?;
        Ok(Counts { products, sales })
    }

    fn count(&self, sql: &str) -> Result<i64> {
        Ok(self.conn.query_row(sql, [], |row| row.get(0))?)
    }

    /// Check if a table exists.
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Get a product by id.
    pub fn get_product(&self, id: i64) -> Result<Option<Product>> {
        let product = self
            .conn
            .query_row(
                "SELECT id_produto, nome_produto, categoria, preco_unitario
                 FROM produtos WHERE id_produto = ?1",
                params![id],
                product_from_row,
            )
            .optional()?;
        Ok(product)
    }

    /// All products ordered by id.
    pub fn get_products(&self) -> Result<Vec<Product>> {
        let mut stmt = self.conn.prepare(
            "SELECT id_produto, nome_produto, categoria, preco_unitario
             FROM produtos ORDER BY id_produto",
        )?;
        let products = stmt
            .query_map([], product_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(products)
    }

    /// All sales ordered by id.
    pub fn get_sales(&self) -> Result<Vec<Sale>> {
        let mut stmt = self.conn.prepare(
            "SELECT id_venda, id_produto, quantidade, data_venda, desconto
             FROM vendas ORDER BY id_venda",
        )?;
        let sales = stmt
            .query_map([], |row| {
                let date: String = row.get(3)?;
                Ok(Sale {
                    id: row.get(0)?,
                    product_id: row.get(1)?,
                    quantity: row.get(2)?,
                    date: parse_date(&date, "data_venda")?,
                    discount: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(sales)
    }

    /// Ids of sales whose non-null product reference has no matching product.
    ///
    /// Always empty while foreign keys are enforced.
    pub fn dangling_sale_ids(&self) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare(
            "SELECT v.id_venda FROM vendas v
             LEFT JOIN produtos p ON v.id_produto = p.id_produto
             WHERE v.id_produto IS NOT NULL AND p.id_produto IS NULL
             ORDER BY v.id_venda",
        )?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;
        Ok(ids)
    }

    /// Run the sales/products join report.
    pub fn sale_lines(&self) -> Result<Vec<SaleLine>> {
        let mut stmt = self.conn.prepare(report::QUERY)?;
        let lines = stmt
            .query_map([], SaleLine::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(lines)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
