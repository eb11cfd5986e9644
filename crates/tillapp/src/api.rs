//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single
//! entry point for all till operations, regardless of the UI driving it.
//! One method per named request — the UI sends a payload, the core runs a
//! read-modify-write cycle against the store and hands back the full
//! updated document (or a query result). The UI holds no authoritative
//! state, only the cached copy it got from the last response.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdout, stderr, or file formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `TillApi<S: DataStore>` is generic over the storage backend:
//! production uses `TillApi<FileStore>`, tests use
//! `TillApi<InMemoryStore>` and never touch the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{Document, Product};
use crate::store::DataStore;
use chrono::NaiveDate;

pub struct TillApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TillApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load_data(&self) -> Result<Document> {
        self.store.load()
    }

    pub fn save_product(&mut self, product: Product) -> Result<commands::CmdResult> {
        commands::product::save(&mut self.store, product)
    }

    pub fn delete_product(&mut self, product_id: &str) -> Result<commands::CmdResult> {
        commands::product::delete(&mut self.store, product_id)
    }

    pub fn list_products(&self, filter: &commands::product::ProductFilter) -> Result<Vec<Product>> {
        commands::product::list(&self.store, filter)
    }

    pub fn save_category(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::category::add(&mut self.store, name)
    }

    pub fn record_sale(&mut self, product_id: &str, quantity: u32) -> Result<commands::CmdResult> {
        commands::sale::record(&mut self.store, product_id, quantity)
    }

    pub fn daily_report(&self, date: NaiveDate) -> Result<commands::report::ReportResult> {
        commands::report::daily(&self.store, date)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::product::ProductFilter;
pub use crate::commands::report::ReportResult;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_product;
    use crate::store::memory::InMemoryStore;
    use chrono::Utc;

    #[test]
    fn test_facade_dispatches_to_commands() {
        let mut api = TillApi::new(InMemoryStore::new());

        let mut product = sample_product("", 5);
        product.id = String::new();
        let saved = api.save_product(product).unwrap();
        let id = saved.document.products[0].id.clone();

        api.save_category("General").unwrap();
        api.record_sale(&id, 2).unwrap();

        let doc = api.load_data().unwrap();
        assert_eq!(doc.products[0].quantity, 3);
        assert_eq!(doc.sales.len(), 1);

        let report = api.daily_report(Utc::now().date_naive()).unwrap();
        assert_eq!(report.report.transactions, 1);

        api.delete_product(&id).unwrap();
        assert!(api.load_data().unwrap().products.is_empty());
    }
}
