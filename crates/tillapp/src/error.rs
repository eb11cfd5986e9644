use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TillError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },

    /// The data file exists but its bytes do not parse as a document.
    /// Surfaced to the caller instead of silently substituting an empty
    /// document, which would discard whatever data is still in the file.
    #[error("Data file {} is corrupt: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TillError>;
