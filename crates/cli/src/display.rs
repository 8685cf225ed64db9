// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of report lines, NULL counts and indicators.

use vd_core::{CleanLine, Metrics, NullCounts, SaleLine};

/// Marker printed for absent values.
pub const NULL: &str = "NULL";

/// Format a currency amount as `R$ 1,234.56`.
pub fn money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("R$ {sign}{grouped}.{:02}", cents % 100)
}

fn decimal(value: Option<f64>) -> String {
    value.map_or_else(|| NULL.to_string(), |v| format!("{v:.2}"))
}

fn integer(value: Option<i64>) -> String {
    value.map_or_else(|| NULL.to_string(), |v| v.to_string())
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or(NULL)
}

const HEADER: [&str; 8] = [
    "id", "data", "produto", "categoria", "qtd", "preco", "desconto", "total",
];

fn row(cells: [&str; 8]) -> String {
    format!(
        "{:>3}  {:<10}  {:<30}  {:<12}  {:>4}  {:>9}  {:>8}  {:>9}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], cells[6], cells[7]
    )
    .trim_end()
    .to_string()
}

/// Raw report lines, one per sale, absent values shown as `NULL`.
pub fn raw_table(lines: &[SaleLine]) -> Vec<String> {
    let mut out = vec![row(HEADER)];
    for line in lines {
        let date = line.date.to_string();
        let id = line.sale_id.to_string();
        let (qty, price, discount, total) = (
            integer(line.quantity),
            decimal(line.unit_price),
            decimal(line.discount),
            decimal(line.total),
        );
        out.push(row([
            &id,
            &date,
            text(line.product_name.as_deref()),
            text(line.category.as_deref()),
            &qty,
            &price,
            &discount,
            &total,
        ]));
    }
    out
}

/// Cleaned report lines.
pub fn clean_table(lines: &[CleanLine]) -> Vec<String> {
    let mut out = vec![row(HEADER)];
    for line in lines {
        let date = line.date.to_string();
        let id = line.sale_id.to_string();
        let (qty, price, discount, total) = (
            integer(line.quantity),
            decimal(Some(line.unit_price)),
            decimal(Some(line.discount)),
            decimal(line.total),
        );
        out.push(row([
            &id,
            &date,
            &line.product_name,
            &line.category,
            &qty,
            &price,
            &discount,
            &total,
        ]));
    }
    out
}

/// Side-by-side absent-value counts.
pub fn null_table(raw: &NullCounts, cleaned: &NullCounts) -> Vec<String> {
    let mut out = vec![format!("{:<16}{:>6}{:>8}", "coluna", "antes", "depois")];
    for ((column, before), (_, after)) in raw.entries().iter().zip(cleaned.entries()) {
        out.push(format!("{column:<16}{before:>6}{after:>8}"));
    }
    out
}

/// Indicator summary.
pub fn metrics_text(metrics: &Metrics) -> Vec<String> {
    let mut out = vec![
        format!("Faturamento total: {}", money(metrics.total_revenue)),
        format!("Produtos vendidos: {}", metrics.total_units),
        String::new(),
        "Faturamento por categoria:".to_string(),
    ];
    for c in &metrics.revenue_by_category {
        out.push(format!("  {:<24}{:>16}", c.category, money(c.revenue)));
    }

    out.push(String::new());
    out.push("Produtos mais vendidos:".to_string());
    for p in &metrics.top_products {
        out.push(format!("  {:<32}{:>8}", p.product_name, p.units));
    }

    out.push(String::new());
    out.push("Dias de maior faturamento:".to_string());
    for d in &metrics.top_days {
        out.push(format!("  {:<24}{:>16}", d.date.to_string(), money(d.revenue)));
    }

    out.push(String::new());
    out.push("Faturamento por dia:".to_string());
    for d in &metrics.revenue_by_day {
        out.push(format!("  {:<24}{:>16}", d.date.to_string(), money(d.revenue)));
    }
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
