//! The sale transaction: the one operation with cross-entity invariants.
//!
//! A recorded sale touches three parts of the document — the sales
//! ledger (append), the product (stock decrement), and the daily report
//! (additive upsert). Validation happens up front; once it passes, all
//! three mutations are applied to the in-memory document and persisted
//! with a single `save`, so they land together or not at all.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TillError};
use crate::model::{DailyReport, Sale};
use crate::store::DataStore;
use chrono::Utc;

pub fn record<S: DataStore>(store: &mut S, product_id: &str, quantity: u32) -> Result<CmdResult> {
    if quantity == 0 {
        return Err(TillError::InvalidInput(
            "sale quantity must be at least 1".to_string(),
        ));
    }

    let mut doc = store.load()?;

    let index = doc
        .products
        .iter()
        .position(|p| p.id == product_id)
        .ok_or_else(|| TillError::ProductNotFound(product_id.to_string()))?;
    let product = &doc.products[index];
    if product.quantity < quantity {
        return Err(TillError::InsufficientStock {
            product: product.name.clone(),
            requested: quantity,
            available: product.quantity,
        });
    }

    // Validation gate passed: apply all mutations, then persist once.
    let sale = Sale::record(product, quantity, Utc::now());
    doc.products[index].quantity -= quantity;

    doc.daily_reports
        .entry(sale.date())
        .or_insert_with(|| DailyReport::empty(sale.date()))
        .absorb(&sale);

    let message = CmdMessage::success(format!(
        "Sold {} x {} for {:.2}",
        sale.quantity, sale.product_name, sale.total_amount
    ));
    doc.sales.push(sale);

    store.save(&doc)?;
    Ok(CmdResult::new(doc).with_message(message))
}
