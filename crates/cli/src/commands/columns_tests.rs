// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn text_lists_every_column() {
    let out = render(OutputFormat::Text).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 10);
    assert!(lines[0].starts_with("tabela"));
    let price = lines.iter().find(|l| l.contains("preco_unitario")).unwrap();
    assert!(price.contains("DECIMAL(10, 2)"));
    assert!(price.contains("sim"));
}

#[test]
fn text_marks_keys() {
    let out = render(OutputFormat::Text).unwrap();
    let reference = out
        .lines()
        .find(|l| l.starts_with("vendas") && l.contains("id_produto"))
        .unwrap();
    assert!(reference.ends_with("FK produtos(id_produto)"));

    let date = out.lines().find(|l| l.contains("data_venda")).unwrap();
    let cells: Vec<&str> = date.split_whitespace().collect();
    assert_eq!(cells, vec!["vendas", "data_venda", "DATE", "não"]);
}

#[test]
fn json_follows_column_contract() {
    let out = render(OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let columns = json["columns"].as_array().unwrap();

    assert_eq!(columns.len(), 9);
    assert_eq!(columns[0]["table"], "produtos");
    assert_eq!(columns[0]["column"], "id_produto");
    assert_eq!(columns[0]["column_type"], "integer");
    assert_eq!(columns[0]["nullable"], false);
    assert_eq!(columns[0]["key"], "primary");
    assert_eq!(columns[5]["key"]["foreign"][0], "produtos");
}
