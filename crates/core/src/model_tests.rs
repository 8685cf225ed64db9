// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn product_new_fills_every_column() {
    let product = Product::new(3, "Teclado", "Acessórios", 249.90);
    assert_eq!(product.id, 3);
    assert_eq!(product.name.as_deref(), Some("Teclado"));
    assert_eq!(product.category.as_deref(), Some("Acessórios"));
    assert_eq!(product.unit_price, Some(249.90));
}

#[test]
fn sale_date_str_is_iso() {
    let date = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
    let sale = Sale::new(3, Some(2), Some(3), date, Some(5.0));
    assert_eq!(sale.date_str(), "2025-10-03");
}

#[test]
fn absent_values_serialize_as_null() {
    let date = NaiveDate::from_ymd_opt(2025, 10, 28).unwrap();
    let sale = Sale::new(28, None, Some(2), date, Some(0.0));
    let json = serde_json::to_value(&sale).unwrap();
    assert!(json["product_id"].is_null());
    assert_eq!(json["date"], "2025-10-28");
}
