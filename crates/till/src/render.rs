//! Terminal rendering: tables and message printing.
//!
//! Column widths account for display width, not byte length, so product
//! names in any script line up.

use colored::*;
use tillapp::api::{CmdMessage, MessageLevel, ReportResult};
use tillapp::model::{Product, Sale, StockStatus};
use unicode_width::UnicodeWidthStr;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Info => println!("{}", message.content),
        }
    }
}

fn pad(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    let fill = width.saturating_sub(current);
    format!("{}{}", text, " ".repeat(fill))
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.chain(std::iter::once(UnicodeWidthStr::width(header))).max().unwrap_or(0)
}

fn status_label(status: StockStatus) -> ColoredString {
    match status {
        StockStatus::OutOfStock => "Out of Stock".red(),
        StockStatus::LowStock => "Low Stock".yellow(),
        StockStatus::InStock => "In Stock".green(),
    }
}

/// Short id shown in listings; selectors accept any unique prefix.
/// Ids are opaque strings, so truncation must respect char boundaries.
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

pub fn render_product_table(products: &[Product]) {
    if products.is_empty() {
        println!("No products.");
        return;
    }

    let name_w = column_width(
        "Name",
        products.iter().map(|p| UnicodeWidthStr::width(p.name.as_str())),
    );
    let cat_w = column_width(
        "Category",
        products
            .iter()
            .map(|p| UnicodeWidthStr::width(p.category.as_str())),
    );

    println!(
        "{}",
        format!(
            "{}  {}  {}  {:>8}  {:>8}  {:>5}  {}",
            pad("ID", 8),
            pad("Name", name_w),
            pad("Category", cat_w),
            "Cost",
            "Price",
            "Qty",
            "Status"
        )
        .bold()
    );

    for product in products {
        let row = format!(
            "{}  {}  {}  {:>8.2}  {:>8.2}  {:>5}  ",
            pad(&short_id(&product.id), 8),
            pad(&product.name, name_w),
            pad(&product.category, cat_w),
            product.cost_price,
            product.selling_price,
            product.quantity,
        );
        println!("{}{}", row, status_label(product.stock_status()));
    }
}

fn render_sales_table(sales: &[Sale]) {
    if sales.is_empty() {
        println!("No sales on this date.");
        return;
    }

    let name_w = column_width(
        "Product",
        sales
            .iter()
            .map(|s| UnicodeWidthStr::width(s.product_name.as_str())),
    );

    println!(
        "{}",
        format!(
            "{}  {}  {:>5}  {:>8}  {:>9}  {:>8}",
            pad("Time", 8),
            pad("Product", name_w),
            "Qty",
            "Unit",
            "Total",
            "Profit"
        )
        .bold()
    );

    for sale in sales {
        println!(
            "{}  {}  {:>5}  {:>8.2}  {:>9.2}  {:>8.2}",
            pad(&sale.timestamp.format("%H:%M:%S").to_string(), 8),
            pad(&sale.product_name, name_w),
            sale.quantity,
            sale.unit_price,
            sale.total_amount,
            sale.profit,
        );
    }
}

pub fn render_report(result: &ReportResult) {
    let report = &result.report;
    println!("{}", format!("Daily report for {}", report.date).bold());
    println!("  Total sales:  {:.2}", report.total_sales);
    println!("  Total profit: {:.2}", report.total_profit);
    println!("  Transactions: {}", report.transactions);
    println!();
    render_sales_table(&result.sales);
}
