// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sales joined with their products.
//!
//! A `LEFT JOIN`, so orphaned sales still show up, with every product column
//! absent.

use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::model::DATE_FORMAT;

/// The join query, one line per sale ordered by sale id.
///
/// `valor_total` is absent whenever quantity or price is absent.
pub const QUERY: &str = "
SELECT
    v.id_venda,
    v.data_venda,
    p.nome_produto,
    p.categoria,
    v.quantidade,
    p.preco_unitario,
    v.desconto,
    (v.quantidade * (p.preco_unitario - IFNULL(v.desconto, 0))) AS valor_total
FROM vendas v
LEFT JOIN produtos p ON v.id_produto = p.id_produto
ORDER BY v.id_venda";

/// One row of [`QUERY`], exactly as the store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SaleLine {
    pub sale_id: i64,
    pub date: NaiveDate,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    pub discount: Option<f64>,
    pub total: Option<f64>,
}

/// Parse a stored `YYYY-MM-DD` date, returning a rusqlite error on failure.
pub(crate) fn parse_date(value: &str, column: &str) -> Result<NaiveDate, rusqlite::Error> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(crate::Error::CorruptedData(format!(
                "invalid date '{value}' in column '{column}'"
            ))),
        )
    })
}

impl SaleLine {
    /// Map a row of [`QUERY`].
    pub fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        let date: String = row.get(1)?;
        Ok(SaleLine {
            sale_id: row.get(0)?,
            date: parse_date(&date, "data_venda")?,
            product_name: row.get(2)?,
            category: row.get(3)?,
            quantity: row.get(4)?,
            unit_price: row.get(5)?,
            discount: row.get(6)?,
            total: row.get(7)?,
        })
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
