// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Rejection;
use crate::schema;
use crate::Database;
use yare::parameterized;

fn defined() -> Database {
    let db = Database::open_in_memory().unwrap();
    schema::define(&db.conn).unwrap();
    db
}

#[test]
fn standard_fixture_sizes() {
    let fixture = Fixture::standard();
    assert_eq!(fixture.products.len(), 15);
    assert_eq!(fixture.sales.len(), 30);
}

#[test]
fn ids_are_sequential() {
    let fixture = Fixture::standard();
    let product_ids: Vec<i64> = fixture.products.iter().map(|p| p.id).collect();
    let sale_ids: Vec<i64> = fixture.sales.iter().map(|s| s.id).collect();
    assert_eq!(product_ids, (1..=15).collect::<Vec<_>>());
    assert_eq!(sale_ids, (1..=30).collect::<Vec<_>>());
}

#[test]
fn sale_dates_follow_ids() {
    for sale in sales() {
        assert_eq!(sale.date_str(), format!("2025-10-{:02}", sale.id));
    }
}

#[test]
fn gaps_in_products() {
    let products = products();
    let no_price: Vec<i64> = products
        .iter()
        .filter(|p| p.unit_price.is_none())
        .map(|p| p.id)
        .collect();
    let no_category: Vec<i64> = products
        .iter()
        .filter(|p| p.category.is_none())
        .map(|p| p.id)
        .collect();
    assert_eq!(no_price, vec![14]);
    assert_eq!(no_category, vec![15]);
    assert!(products.iter().all(|p| p.name.is_some()));
}

fn is_absent(sale: &Sale, column: &str) -> bool {
    match column {
        "quantidade" => sale.quantity.is_none(),
        "desconto" => sale.discount.is_none(),
        "id_produto" => sale.product_id.is_none(),
        _ => false,
    }
}

#[parameterized(
    quantity = { "quantidade", vec![20, 23, 26] },
    discount = { "desconto", vec![4, 11, 17, 25] },
    product = { "id_produto", vec![28] },
)]
fn gaps_in_sales(column: &str, expected: Vec<i64>) {
    let ids: Vec<i64> = sales()
        .iter()
        .filter(|s| is_absent(s, column))
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn every_reference_points_into_the_catalog() {
    let fixture = Fixture::standard();
    for sale in &fixture.sales {
        if let Some(product_id) = sale.product_id {
            assert!(fixture.products.iter().any(|p| p.id == product_id));
        }
    }
}

#[test]
fn load_appends_all_rows() {
    let db = defined();
    load(&db.conn, &Fixture::standard()).unwrap();

    let counts = db.counts().unwrap();
    assert_eq!(counts.products, 15);
    assert_eq!(counts.sales, 30);
}

#[test]
fn load_empty_fixture_is_a_no_op() {
    let db = defined();
    load(&db.conn, &Fixture::empty()).unwrap();
    assert_eq!(db.counts().unwrap().products, 0);
}

#[test]
fn orphaned_sale_inserts_despite_foreign_key() {
    let db = defined();
    let sale = Sale::new(28, None, Some(2), october(28), Some(0.0));
    insert_sale(&db.conn, &sale).unwrap();

    let stored = db.get_sales().unwrap();
    assert_eq!(stored, vec![sale]);
}

#[test]
fn unknown_product_is_rejected() {
    let db = defined();
    let sale = Sale::new(1, Some(99), Some(1), october(1), None);

    let err = insert_sale(&db.conn, &sale).unwrap_err();
    assert!(matches!(
        err,
        Error::Rejected {
            table: "vendas",
            id: 1,
            kind: Rejection::ForeignKey,
            ..
        }
    ));
}

#[test]
fn duplicate_product_is_rejected() {
    let db = defined();
    let product = Product::new(1, "A", "B", 1.0);
    insert_product(&db.conn, &product).unwrap();

    let err = insert_product(&db.conn, &product).unwrap_err();
    assert!(matches!(
        err,
        Error::Rejected {
            table: "produtos",
            kind: Rejection::DuplicateKey,
            ..
        }
    ));
}

#[test]
fn load_stops_at_first_rejection() {
    let db = defined();
    let mut fixture = Fixture::standard();
    fixture.sales[9].product_id = Some(99);

    let err = load(&db.conn, &fixture).unwrap_err();
    assert!(matches!(err, Error::Rejected { id: 10, .. }));

    let counts = db.counts().unwrap();
    assert_eq!(counts.products, 15);
    assert_eq!(counts.sales, 9);
}
