// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Row types for the `produtos` and `vendas` tables.
//!
//! Every nullable column is an `Option`, so absent values survive the trip
//! through the store unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage format of `vendas.data_venda`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A catalog entry in `produtos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
}

impl Product {
    /// Create a fully populated product.
    pub fn new(id: i64, name: &str, category: &str, unit_price: f64) -> Self {
        Product {
            id,
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            unit_price: Some(unit_price),
        }
    }
}

/// A sale record in `vendas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Sale {
    pub id: i64,
    /// Referenced product; `None` marks an orphaned sale.
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
    pub date: NaiveDate,
    /// Currency amount taken off each unit.
    pub discount: Option<f64>,
}

impl Sale {
    pub fn new(
        id: i64,
        product_id: Option<i64>,
        quantity: Option<i64>,
        date: NaiveDate,
        discount: Option<f64>,
    ) -> Self {
        Sale {
            id,
            product_id,
            quantity,
            date,
            discount,
        }
    }

    /// Date rendered the way it is stored.
    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
