use super::DataStore;
use crate::error::{Result, TillError};
use crate::model::Document;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory store for testing logic without filesystem I/O.
///
/// Holds the serialized JSON rather than a `Document`, so loads go
/// through the same parse and self-heal path as the file store.
pub struct InMemoryStore {
    raw: RefCell<Option<String>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            raw: RefCell::new(None),
        }
    }

    /// Seed the store with arbitrary bytes, e.g. partial or corrupt JSON.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: RefCell::new(Some(raw.to_string())),
        }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Document> {
        let existing = self.raw.borrow().clone();
        match existing {
            None => {
                let doc = Document::default();
                *self.raw.borrow_mut() = Some(serde_json::to_string(&doc)?);
                Ok(doc)
            }
            Some(content) => {
                serde_json::from_str(&content).map_err(|source| TillError::CorruptStore {
                    path: PathBuf::from("<memory>"),
                    source,
                })
            }
        }
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        *self.raw.borrow_mut() = Some(serde_json::to_string(doc)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Product;

    /// A catalog product with sane defaults for tests.
    pub fn sample_product(id: &str, quantity: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: "General".to_string(),
            cost_price: 6.0,
            selling_price: 10.0,
            quantity,
            low_stock_alert: 2,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_product(mut self, product: Product) -> Self {
            let mut doc = self.store.load().unwrap();
            doc.products.push(product);
            self.store.save(&doc).unwrap();
            self
        }

        pub fn with_category(mut self, name: &str) -> Self {
            let mut doc = self.store.load().unwrap();
            doc.categories.push(name.to_string());
            self.store.save(&doc).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{sample_product, StoreFixture};
    use super::*;

    #[test]
    fn test_empty_store_loads_default() {
        let store = InMemoryStore::new();
        assert_eq!(store.load().unwrap(), Document::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = InMemoryStore::new();
        let mut doc = Document::default();
        doc.categories.push("Beverages".to_string());
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn test_corrupt_raw_surfaces_error() {
        let store = InMemoryStore::with_raw("}{");
        assert!(matches!(
            store.load(),
            Err(TillError::CorruptStore { .. })
        ));
    }

    #[test]
    fn test_partial_raw_self_heals() {
        let store = InMemoryStore::with_raw(r#"{"categories": ["Snacks"]}"#);
        let doc = store.load().unwrap();
        assert_eq!(doc.categories, vec!["Snacks"]);
        assert!(doc.products.is_empty());
    }

    #[test]
    fn test_fixture_seeds_state() {
        let fixture = StoreFixture::new()
            .with_product(sample_product("1", 5))
            .with_category("General");

        let doc = fixture.store.load().unwrap();
        assert_eq!(doc.products.len(), 1);
        assert_eq!(doc.categories, vec!["General"]);
    }
}
