use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TillError};
use crate::store::DataStore;

/// Add a category name if it is not already present (exact match).
/// Idempotent: adding an existing name changes nothing and is not an
/// error. The document is only persisted when it actually changed.
pub fn add<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TillError::InvalidInput(
            "category name must not be empty".to_string(),
        ));
    }

    let mut doc = store.load()?;
    let message = if doc.categories.iter().any(|c| c == name) {
        CmdMessage::info(format!("Category already exists: {name}"))
    } else {
        doc.categories.push(name.to_string());
        store.save(&doc)?;
        CmdMessage::success(format!("Category added: {name}"))
    };

    Ok(CmdResult::new(doc).with_message(message))
}
