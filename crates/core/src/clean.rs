// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! NULL treatment for report lines.
//!
//! Discounts and prices default to zero, category and product name to
//! configurable labels. Quantity is never invented: a line without one keeps
//! an absent total and drops out of the sums.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::report::SaleLine;

/// Category assigned to lines whose product has none.
pub const DEFAULT_CATEGORY_FILL: &str = "Outros";
/// Name assigned to lines whose sale references no product.
pub const DEFAULT_PRODUCT_FILL: &str = "Produto Desconhecido";

/// Labels substituted for absent text columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillDefaults {
    pub category: String,
    pub product: String,
}

impl Default for FillDefaults {
    fn default() -> Self {
        FillDefaults {
            category: DEFAULT_CATEGORY_FILL.to_string(),
            product: DEFAULT_PRODUCT_FILL.to_string(),
        }
    }
}

/// A report line after NULL treatment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CleanLine {
    pub sale_id: i64,
    pub date: NaiveDate,
    pub product_name: String,
    pub category: String,
    pub quantity: Option<i64>,
    pub unit_price: f64,
    pub discount: f64,
    pub total: Option<f64>,
}

impl CleanLine {
    pub fn from_line(line: &SaleLine, fill: &FillDefaults) -> Self {
        let unit_price = line.unit_price.unwrap_or(0.0);
        let discount = line.discount.unwrap_or(0.0);
        CleanLine {
            sale_id: line.sale_id,
            date: line.date,
            product_name: line
                .product_name
                .clone()
                .unwrap_or_else(|| fill.product.clone()),
            category: line
                .category
                .clone()
                .unwrap_or_else(|| fill.category.clone()),
            quantity: line.quantity,
            unit_price,
            discount,
            total: line.quantity.map(|q| q as f64 * (unit_price - discount)),
        }
    }
}

/// Clean every line, keeping order.
pub fn clean(lines: &[SaleLine], fill: &FillDefaults) -> Vec<CleanLine> {
    lines
        .iter()
        .map(|line| CleanLine::from_line(line, fill))
        .collect()
}

/// Absent values per report column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct NullCounts {
    pub product_name: usize,
    pub category: usize,
    pub quantity: usize,
    pub unit_price: usize,
    pub discount: usize,
    pub total: usize,
}

impl NullCounts {
    /// Count absent values in raw lines.
    pub fn of_raw(lines: &[SaleLine]) -> Self {
        let mut counts = NullCounts::default();
        for line in lines {
            counts.product_name += usize::from(line.product_name.is_none());
            counts.category += usize::from(line.category.is_none());
            counts.quantity += usize::from(line.quantity.is_none());
            counts.unit_price += usize::from(line.unit_price.is_none());
            counts.discount += usize::from(line.discount.is_none());
            counts.total += usize::from(line.total.is_none());
        }
        counts
    }

    /// Count absent values in cleaned lines. Only quantity and total can be.
    pub fn of_clean(lines: &[CleanLine]) -> Self {
        let mut counts = NullCounts::default();
        for line in lines {
            counts.quantity += usize::from(line.quantity.is_none());
            counts.total += usize::from(line.total.is_none());
        }
        counts
    }

    /// Column name and count pairs, in report column order.
    pub fn entries(&self) -> [(&'static str, usize); 6] {
        [
            ("nome_produto", self.product_name),
            ("categoria", self.category),
            ("quantidade", self.quantity),
            ("preco_unitario", self.unit_price),
            ("desconto", self.discount),
            ("valor_total", self.total),
        ]
    }
}

#[cfg(test)]
#[path = "clean_tests.rs"]
mod tests;
