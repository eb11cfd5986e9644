//! # Domain Model: the Document and its entities
//!
//! All persisted state lives in a single [`Document`]: the product
//! catalog, the category names, the append-only sales ledger, and the
//! per-day aggregates. Every mutation is a read-modify-write of the whole
//! document.
//!
//! ## Data-file contract
//!
//! The document serializes with camelCase field names (`costPrice`,
//! `totalAmount`, `dailyReports`, ...) because that is the on-disk format
//! existing data files use. Changing a rename here is a breaking change to
//! every stored `inventory.json`.
//!
//! ## Self-healing load
//!
//! Each top-level Document field carries a declared serde default, so a
//! file missing `sales` or `dailyReports` (older files only carried
//! `products` and `categories`) deserializes cleanly: missing fields fill
//! with their empty defaults, present fields are untouched.
//!
//! ## Lifecycle
//!
//! - [`Product`]: created/replaced/deleted by catalog operations. Hard
//!   delete, no tombstone, not cascaded into sales.
//! - [`Sale`]: immutable once recorded. Carries a snapshot of the product
//!   name and pricing so reports stay accurate after a product is deleted.
//! - [`DailyReport`]: created lazily on the first sale of a date, mutated
//!   additively, never deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Generate a fresh opaque id for a product or sale.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// The single root object holding all persisted state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub daily_reports: BTreeMap<NaiveDate, DailyReport>,
}

impl Document {
    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_product_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }
}

/// Stock level relative to the product's low-stock threshold.
///
/// Presentation-facing: the core never blocks an operation because of a
/// low-stock state, it only reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique id. The empty string means "not yet assigned";
    /// saving such a product appends it with a fresh id.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub cost_price: f64,
    pub selling_price: f64,
    pub quantity: u32,
    pub low_stock_alert: u32,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity == 0 {
            StockStatus::OutOfStock
        } else if self.quantity <= self.low_stock_alert {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// An immutable record of one stock-depleting transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub product_id: String,
    /// Snapshot of the product name at the moment of recording.
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_amount: f64,
    pub profit: f64,
    pub timestamp: DateTime<Utc>,
}

impl Sale {
    /// Build the sale record for selling `quantity` units of `product`.
    ///
    /// Pricing is taken from the product at this moment: the unit price is
    /// the selling price, and profit is margin times quantity. The caller
    /// is responsible for having validated stock availability.
    pub fn record(product: &Product, quantity: u32, timestamp: DateTime<Utc>) -> Self {
        let unit_price = product.selling_price;
        let total_amount = f64::from(quantity) * unit_price;
        let profit = f64::from(quantity) * (unit_price - product.cost_price);
        Self {
            id: fresh_id(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price,
            total_amount,
            profit,
            timestamp,
        }
    }

    /// Calendar date this sale falls on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Additive daily aggregate of sales totals, profit, and transaction count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total_sales: f64,
    pub total_profit: f64,
    pub transactions: u32,
}

impl DailyReport {
    /// A report with zero accumulators, for dates without sales.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_sales: 0.0,
            total_profit: 0.0,
            transactions: 0,
        }
    }

    /// Fold one sale into the accumulators.
    pub fn absorb(&mut self, sale: &Sale) {
        self.total_sales += sale.total_amount;
        self.total_profit += sale.profit;
        self.transactions += 1;
    }
}
