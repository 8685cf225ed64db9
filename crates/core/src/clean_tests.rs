// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::{Database, Fixture, LoadMode};

fn raw() -> Vec<SaleLine> {
    let mut db = Database::open_in_memory().unwrap();
    db.rebuild(&Fixture::standard(), LoadMode::Statement).unwrap();
    db.sale_lines().unwrap()
}

fn sample(product_name: Option<&str>, quantity: Option<i64>) -> SaleLine {
    SaleLine {
        sale_id: 1,
        date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        product_name: product_name.map(str::to_string),
        category: None,
        quantity,
        unit_price: None,
        discount: None,
        total: None,
    }
}

#[test]
fn fills_text_and_zeroes_numbers() {
    let clean = CleanLine::from_line(&sample(None, Some(2)), &FillDefaults::default());
    assert_eq!(clean.product_name, "Produto Desconhecido");
    assert_eq!(clean.category, "Outros");
    assert_eq!(clean.unit_price, 0.0);
    assert_eq!(clean.discount, 0.0);
    assert_eq!(clean.total, Some(0.0));
}

#[test]
fn absent_quantity_stays_absent() {
    let clean = CleanLine::from_line(&sample(Some("Mouse"), None), &FillDefaults::default());
    assert_eq!(clean.product_name, "Mouse");
    assert!(clean.quantity.is_none());
    assert!(clean.total.is_none());
}

#[test]
fn custom_fill_labels() {
    let fill = FillDefaults {
        category: "Sem categoria".to_string(),
        product: "?".to_string(),
    };
    let clean = CleanLine::from_line(&sample(None, Some(1)), &fill);
    assert_eq!(clean.category, "Sem categoria");
    assert_eq!(clean.product_name, "?");
}

#[test]
fn raw_null_counts() {
    let counts = NullCounts::of_raw(&raw());
    assert_eq!(
        counts,
        NullCounts {
            product_name: 1,
            category: 2,
            quantity: 3,
            unit_price: 2,
            discount: 4,
            total: 5,
        }
    );
}

#[test]
fn only_quantity_gaps_survive_cleaning() {
    let cleaned = clean(&raw(), &FillDefaults::default());
    let counts = NullCounts::of_clean(&cleaned);
    assert_eq!(
        counts,
        NullCounts {
            quantity: 3,
            total: 3,
            ..NullCounts::default()
        }
    );
}

#[test]
fn cleaning_recomputes_totals() {
    let cleaned = clean(&raw(), &FillDefaults::default());
    let pen_drive = cleaned.iter().find(|l| l.sale_id == 13).unwrap();
    assert_eq!(pen_drive.total, Some(0.0));

    let cable = cleaned.iter().find(|l| l.sale_id == 18).unwrap();
    assert_eq!(cable.category, "Outros");
    assert!((cable.total.unwrap() - 119.6).abs() < 1e-9);
}

#[test]
fn entries_follow_report_columns() {
    let names: Vec<&str> = NullCounts::default()
        .entries()
        .iter()
        .map(|(name, _)| *name)
        .collect();
    assert_eq!(
        names,
        vec![
            "nome_produto",
            "categoria",
            "quantidade",
            "preco_unitario",
            "desconto",
            "valor_total"
        ]
    );
}
