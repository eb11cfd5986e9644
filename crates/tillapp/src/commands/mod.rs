//! # Command Layer
//!
//! This module contains the core business logic of till. Each operation
//! lives in its own submodule and implements pure functions over a
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Responsibilities
//!
//! - Run one read-modify-write cycle per operation: load the document,
//!   validate, mutate, save once.
//! - Return structured [`CmdResult`] values carrying the full updated
//!   document plus messages — never strings meant for a terminal.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O beyond the store**: no stdout, stderr, or formatting.
//! - **Argument parsing**: that's the CLI layer's job.
//! - **User interaction**: no prompts or confirmations.
//!
//! ## Validation gate
//!
//! Every command validates before mutating. A command that returns an
//! error has not called `save`, so the persisted document is unchanged.
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) to avoid
//! filesystem dependencies and verify both the returned result and the
//! persisted document.
//!
//! ## Command Modules
//!
//! - [`product`]: create/update/delete/list catalog entries
//! - [`category`]: add category names (deduplicated)
//! - [`sale`]: the sale transaction
//! - [`report`]: daily report query

use crate::model::Document;
use serde::Serialize;

pub mod category;
pub mod product;
pub mod report;
pub mod sale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured result of a mutating command: the full updated document
/// (the UI's authoritative refresh) plus messages to surface.
#[derive(Debug)]
pub struct CmdResult {
    pub document: Document,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
