// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Business indicators over cleaned report lines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clean::CleanLine;

/// Default length of the top-products and top-days rankings.
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProductUnits {
    pub product_name: String,
    pub units: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DayRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
}

/// Indicators computed by [`compute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Metrics {
    /// Sum of every present line total.
    pub total_revenue: f64,
    /// Sum of every present quantity.
    pub total_units: i64,
    /// Highest revenue first.
    pub revenue_by_category: Vec<CategoryRevenue>,
    /// Most units first, at most `top_n` entries.
    pub top_products: Vec<ProductUnits>,
    /// Oldest day first.
    pub revenue_by_day: Vec<DayRevenue>,
    /// Highest revenue first, at most `top_n` entries.
    pub top_days: Vec<DayRevenue>,
}

/// Compute every indicator. Ties rank by name or date, ascending.
pub fn compute(lines: &[CleanLine], top_n: usize) -> Metrics {
    let mut total_revenue = 0.0;
    let mut total_units = 0;
    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
    let mut by_product: BTreeMap<&str, i64> = BTreeMap::new();
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for line in lines {
        let revenue = line.total.unwrap_or(0.0);
        let units = line.quantity.unwrap_or(0);
        total_revenue += revenue;
        total_units += units;
        *by_category.entry(line.category.as_str()).or_default() += revenue;
        *by_product.entry(line.product_name.as_str()).or_default() += units;
        *by_day.entry(line.date).or_default() += revenue;
    }

    let mut revenue_by_category: Vec<CategoryRevenue> = by_category
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue {
            category: category.to_string(),
            revenue,
        })
        .collect();
    // Stable sort keeps the BTreeMap's name order among ties.
    revenue_by_category.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));

    let mut top_products: Vec<ProductUnits> = by_product
        .into_iter()
        .map(|(name, units)| ProductUnits {
            product_name: name.to_string(),
            units,
        })
        .collect();
    top_products.sort_by(|a, b| b.units.cmp(&a.units));
    top_products.truncate(top_n);

    let revenue_by_day: Vec<DayRevenue> = by_day
        .into_iter()
        .map(|(date, revenue)| DayRevenue { date, revenue })
        .collect();

    let mut top_days = revenue_by_day.clone();
    top_days.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    top_days.truncate(top_n);

    Metrics {
        total_revenue,
        total_units,
        revenue_by_category,
        top_products,
        revenue_by_day,
        top_days,
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
