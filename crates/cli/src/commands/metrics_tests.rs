// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;

fn json(ctx: &TestContext, top_n: usize) -> serde_json::Value {
    let out = render(&ctx.db, &ctx.config.clean.fill(), top_n, OutputFormat::Json).unwrap();
    serde_json::from_str(&out).unwrap()
}

#[test]
fn json_totals() {
    let ctx = TestContext::new();
    let json = json(&ctx, 5);

    assert_eq!(json["top_n"], 5);
    assert_eq!(json["total_units"], 49);
    let revenue = json["total_revenue"].as_f64().unwrap();
    assert!((revenue - 29459.3).abs() < 1e-6);
}

#[test]
fn json_rankings_follow_top_n() {
    let ctx = TestContext::new();
    let json = json(&ctx, 2);

    let products = json["top_products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["product_name"], "Capa para Celular");
    assert_eq!(products[0]["units"], 6);
    assert_eq!(products[1]["product_name"], "Mouse Logitech M170");

    let days = json["top_days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2025-10-07");
    assert_eq!(days[1]["date"], "2025-10-21");

    assert_eq!(json["revenue_by_day"].as_array().unwrap().len(), 30);
}

#[test]
fn json_categories_include_fill_label() {
    let ctx = TestContext::new();
    let json = json(&ctx, 5);

    let categories: Vec<&str> = json["revenue_by_category"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Informática", "Telefonia", "Acessórios", "Outros"]);
}

#[test]
fn text_lists_sections() {
    let ctx = TestContext::new();
    let out = render(&ctx.db, &ctx.config.clean.fill(), 5, OutputFormat::Text).unwrap();

    assert!(out.contains("Faturamento total:"));
    assert!(out.contains("Produtos mais vendidos:"));
    assert!(out.contains("Capa para Celular"));
}

#[test]
fn removing_the_orphan_drops_the_product_fill() {
    let mut ctx = TestContext::new();
    ctx.delete_sale(28);
    let json = json(&ctx, 20);

    let names: Vec<&str> = json["top_products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["product_name"].as_str().unwrap())
        .collect();
    assert!(!names.contains(&"Produto Desconhecido"));
}
