// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed fixture rows and the loader that appends them.
//!
//! The standard fixture carries deliberate gaps: product 14 has no price,
//! product 15 has no category, sales 20, 23 and 26 have no quantity, sales 4,
//! 11, 17 and 25 have no discount, and sale 28 references no product.

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::model::{Product, Sale};
use crate::schema::{PRODUCTS_TABLE, SALES_TABLE};

/// A products + sales pair to load, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
}

impl Fixture {
    /// The fixed catalog of 15 products and log of 30 sales.
    pub fn standard() -> Self {
        Fixture {
            products: products(),
            sales: sales(),
        }
    }

    pub fn empty() -> Self {
        Fixture {
            products: Vec::new(),
            sales: Vec::new(),
        }
    }
}

/// The 15 catalog rows.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Notebook Dell Inspiron", "Informática", 3500.00),
        Product::new(2, "Mouse Logitech M170", "Acessórios", 79.90),
        Product::new(3, "Teclado Mecânico Redragon", "Acessórios", 249.90),
        Product::new(4, "Monitor LG 24 polegadas", "Informática", 899.00),
        Product::new(5, "Smartphone Samsung Galaxy A54", "Telefonia", 1999.00),
        Product::new(6, "Fone de Ouvido JBL", "Acessórios", 199.90),
        Product::new(7, "Carregador Turbo USB-C", "Telefonia", 89.90),
        Product::new(8, "Impressora HP DeskJet", "Informática", 459.00),
        Product::new(9, "SSD Kingston 480GB", "Informática", 289.90),
        Product::new(10, "Webcam Logitech C920", "Acessórios", 399.00),
        Product::new(11, "Roteador TP-Link", "Informática", 179.90),
        Product::new(12, "Capa para Celular", "Telefonia", 39.90),
        Product::new(13, "Tablet Samsung Galaxy Tab", "Telefonia", 1299.00),
        Product {
            id: 14,
            name: Some("Pen Drive SanDisk 64GB".to_string()),
            category: Some("Acessórios".to_string()),
            unit_price: None,
        },
        Product {
            id: 15,
            name: Some("Cabo HDMI 2m".to_string()),
            category: None,
            unit_price: Some(29.90),
        },
    ]
}

/// Sale `id` is dated 2025-10-`id`.
fn october(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).unwrap_or_default()
}

/// The 30 sales rows, one per day of October 2025.
pub fn sales() -> Vec<Sale> {
    let rows: [(i64, Option<i64>, Option<i64>, Option<f64>); 30] = [
        (1, Some(1), Some(1), Some(100.00)),
        (2, Some(12), Some(1), Some(0.00)),
        (3, Some(2), Some(3), Some(5.00)),
        (4, Some(5), Some(1), None),
        (5, Some(6), Some(2), Some(10.00)),
        (6, Some(7), Some(1), Some(0.00)),
        (7, Some(1), Some(2), Some(150.00)),
        (8, Some(3), Some(1), Some(20.00)),
        (9, Some(5), Some(1), Some(200.00)),
        (10, Some(9), Some(2), Some(0.00)),
        (11, Some(4), Some(1), None),
        (12, Some(10), Some(1), Some(30.00)),
        (13, Some(14), Some(3), Some(0.00)),
        (14, Some(8), Some(1), Some(25.00)),
        (15, Some(11), Some(2), Some(10.00)),
        (16, Some(13), Some(1), Some(100.00)),
        (17, Some(2), Some(2), None),
        (18, Some(15), Some(4), Some(0.00)),
        (19, Some(6), Some(1), Some(15.00)),
        (20, Some(9), None, Some(0.00)),
        (21, Some(5), Some(2), Some(150.00)),
        (22, Some(12), Some(5), Some(0.00)),
        (23, Some(3), None, Some(10.00)),
        (24, Some(1), Some(1), Some(250.00)),
        (25, Some(7), Some(3), None),
        (26, Some(4), None, Some(50.00)),
        (27, Some(10), Some(2), Some(20.00)),
        (28, None, Some(2), Some(0.00)),
        (29, Some(13), Some(1), Some(80.00)),
        (30, Some(8), Some(2), Some(0.00)),
    ];

    rows.into_iter()
        .map(|(id, product_id, quantity, discount)| {
            Sale::new(id, product_id, quantity, october(id as u32), discount)
        })
        .collect()
}

/// Insert one product row.
pub fn insert_product(conn: &Connection, product: &Product) -> Result<()> {
    conn.execute(
        "INSERT INTO produtos (id_produto, nome_produto, categoria, preco_unitario)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            product.id,
            product.name,
            product.category,
            product.unit_price
        ],
    )
    .map_err(|e| Error::rejected(PRODUCTS_TABLE, product.id, e))?;
    Ok(())
}

/// Insert one sale row.
pub fn insert_sale(conn: &Connection, sale: &Sale) -> Result<()> {
    conn.execute(
        "INSERT INTO vendas (id_venda, id_produto, quantidade, data_venda, desconto)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            sale.id,
            sale.product_id,
            sale.quantity,
            sale.date_str(),
            sale.discount
        ],
    )
    .map_err(|e| Error::rejected(SALES_TABLE, sale.id, e))?;
    Ok(())
}

/// Append every product, then every sale.
///
/// Stops at the first rejected row; rows before it stay applied unless the
/// caller wrapped the load in a transaction.
pub fn load(conn: &Connection, fixture: &Fixture) -> Result<()> {
    for product in &fixture.products {
        insert_product(conn, product).inspect_err(|e| tracing::warn!("{e}"))?;
    }
    tracing::debug!("inserted {} products", fixture.products.len());

    for sale in &fixture.sales {
        insert_sale(conn, sale).inspect_err(|e| tracing::warn!("{e}"))?;
    }
    tracing::debug!("inserted {} sales", fixture.sales.len());
    Ok(())
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
