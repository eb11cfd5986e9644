//! # Storage Layer
//!
//! This module defines the storage abstraction for till. The [`DataStore`]
//! trait lets the command layer work against different backends.
//!
//! ## Whole-document model
//!
//! There is no record-level storage: the entire [`Document`] is read and
//! rewritten on every mutation. That keeps the contract tiny (`load` /
//! `save`) and makes "every operation sees a consistent document" the only
//! invariant the store has to uphold.
//!
//! ## Load semantics
//!
//! 1. **Missing file**: synthesize the default empty document, persist it,
//!    and return it.
//! 2. **Partial file**: top-level fields missing from the stored JSON fill
//!    with their declared defaults; present fields are never discarded.
//! 3. **Corrupt file**: fail with [`crate::error::TillError::CorruptStore`]. The store
//!    never substitutes an empty document for unparseable bytes — that
//!    would silently discard whatever data is still in the file.
//!
//! ## Save semantics
//!
//! Atomic from the caller's perspective: [`fs::FileStore`] serializes to a
//! sibling temp file and renames it over the target, so no reader can
//! observe a partially written document.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production, one JSON file on disk.
//! - [`memory::InMemoryStore`]: for tests. Holds the serialized bytes in
//!   memory so the parse and self-heal paths are exercised the same way.

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for document storage.
pub trait DataStore {
    /// Load the document, creating the default empty one if none exists.
    fn load(&self) -> Result<Document>;

    /// Overwrite the entire persisted document.
    fn save(&mut self, doc: &Document) -> Result<()>;
}
