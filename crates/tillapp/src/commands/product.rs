use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TillError};
use crate::model::{fresh_id, Product};
use crate::store::DataStore;

/// Filter for listing catalog products.
///
/// Both criteria are optional and conjunctive: name matching is a
/// case-insensitive substring test, category matching is exact.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        let matches_search = self
            .search
            .as_ref()
            .map(|term| {
                product
                    .name
                    .to_lowercase()
                    .contains(&term.to_lowercase())
            })
            .unwrap_or(true);
        let matches_category = self
            .category
            .as_ref()
            .map(|c| product.category == *c)
            .unwrap_or(true);
        matches_search && matches_category
    }
}

fn validate(product: &Product) -> Result<()> {
    if product.name.trim().is_empty() {
        return Err(TillError::InvalidInput(
            "product name must not be empty".to_string(),
        ));
    }
    if !product.cost_price.is_finite() || product.cost_price < 0.0 {
        return Err(TillError::InvalidInput(format!(
            "cost price must be a non-negative number, got {}",
            product.cost_price
        )));
    }
    if !product.selling_price.is_finite() || product.selling_price < 0.0 {
        return Err(TillError::InvalidInput(format!(
            "selling price must be a non-negative number, got {}",
            product.selling_price
        )));
    }
    Ok(())
}

/// Create or update a product. An empty id means "create": a fresh id is
/// assigned and the product is appended. A non-empty id replaces the
/// matching entry in place, preserving its position in the catalog.
pub fn save<S: DataStore>(store: &mut S, mut product: Product) -> Result<CmdResult> {
    validate(&product)?;
    let mut doc = store.load()?;

    let message = if product.id.is_empty() {
        product.id = fresh_id();
        doc.products.push(product.clone());
        CmdMessage::success(format!("Product added: {}", product.name))
    } else {
        let slot = doc
            .find_product_mut(&product.id)
            .ok_or_else(|| TillError::ProductNotFound(product.id.clone()))?;
        *slot = product.clone();
        CmdMessage::success(format!("Product updated: {}", product.name))
    };

    store.save(&doc)?;
    Ok(CmdResult::new(doc).with_message(message))
}

/// Remove a product from the catalog. Deleting an id that does not exist
/// is a no-op, not an error. Historical sales keep their snapshot of the
/// product, so reports stay accurate.
pub fn delete<S: DataStore>(store: &mut S, product_id: &str) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let before = doc.products.len();
    doc.products.retain(|p| p.id != product_id);

    let message = if doc.products.len() < before {
        store.save(&doc)?;
        CmdMessage::success("Product deleted")
    } else {
        CmdMessage::info(format!("No product with id {product_id}, nothing deleted"))
    };

    Ok(CmdResult::new(doc).with_message(message))
}

/// List catalog products matching the filter, in insertion order.
pub fn list<S: DataStore>(store: &S, filter: &ProductFilter) -> Result<Vec<Product>> {
    let doc = store.load()?;
    Ok(doc
        .products
        .into_iter()
        .filter(|p| filter.matches(p))
        .collect())
}
