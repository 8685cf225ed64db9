// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::Database;

struct PragmaColumn {
    name: String,
    declared: String,
    not_null: bool,
    pk: bool,
}

fn table_info(conn: &Connection, table: &str) -> Vec<PragmaColumn> {
    let mut stmt = conn
        .prepare("SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid")
        .unwrap();
    stmt.query_map([table], |row| {
        Ok(PragmaColumn {
            name: row.get(0)?,
            declared: row.get(1)?,
            not_null: row.get(2)?,
            pk: row.get::<_, i64>(3)? > 0,
        })
    })
    .unwrap()
    .collect::<std::result::Result<Vec<_>, _>>()
    .unwrap()
}

#[test]
fn define_creates_both_tables_empty() {
    let db = Database::open_in_memory().unwrap();
    define(&db.conn).unwrap();

    assert!(db.table_exists(PRODUCTS_TABLE).unwrap());
    assert!(db.table_exists(SALES_TABLE).unwrap());
    let counts = db.counts().unwrap();
    assert_eq!(counts.products, 0);
    assert_eq!(counts.sales, 0);
}

#[test]
fn define_discards_prior_rows() {
    let db = Database::open_in_memory().unwrap();
    define(&db.conn).unwrap();
    db.conn
        .execute_batch(
            "INSERT INTO produtos (id_produto, nome_produto) VALUES (1, 'x');
             INSERT INTO vendas (id_venda, id_produto, data_venda) VALUES (1, 1, '2025-10-01');",
        )
        .unwrap();

    define(&db.conn).unwrap();
    assert_eq!(db.counts().unwrap().sales, 0);
    assert_eq!(db.counts().unwrap().products, 0);
}

#[test]
fn declared_columns_match_contract() {
    let db = Database::open_in_memory().unwrap();
    define(&db.conn).unwrap();

    for table in [PRODUCTS_TABLE, SALES_TABLE] {
        let actual = table_info(&db.conn, table);
        let expected: Vec<&ColumnSpec> = columns().iter().filter(|c| c.table == table).collect();
        assert_eq!(actual.len(), expected.len(), "{table}");

        for (col, spec) in actual.iter().zip(expected) {
            assert_eq!(col.name, spec.column);
            let base = spec.column_type.declared().split('(').next().unwrap();
            assert!(col.declared.to_uppercase().starts_with(base), "{}", col.name);
            assert_eq!(col.pk, spec.key == KeyRole::Primary, "{}", col.name);
            if spec.key != KeyRole::Primary {
                assert_eq!(col.not_null, !spec.nullable, "{}", col.name);
            }
        }
    }
}

#[test]
fn sales_reference_products() {
    let db = Database::open_in_memory().unwrap();
    define(&db.conn).unwrap();

    let (parent, from, to): (String, String, String) = db
        .conn
        .query_row(
            "SELECT \"table\", \"from\", \"to\" FROM pragma_foreign_key_list('vendas')",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(parent, "produtos");
    assert_eq!(from, "id_produto");
    assert_eq!(to, "id_produto");
}

#[test]
fn contract_has_one_foreign_key() {
    let foreign: Vec<_> = columns()
        .iter()
        .filter(|c| matches!(c.key, KeyRole::Foreign(..)))
        .collect();
    assert_eq!(foreign.len(), 1);
    assert_eq!(foreign[0].table, SALES_TABLE);
    assert!(foreign[0].nullable);
}

#[test]
fn only_keys_and_sale_date_are_required() {
    let required: Vec<&str> = columns()
        .iter()
        .filter(|c| !c.nullable)
        .map(|c| c.column)
        .collect();
    assert_eq!(required, vec!["id_produto", "id_venda", "data_venda"]);
}
