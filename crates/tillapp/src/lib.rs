//! # Till Architecture
//!
//! Till is a **UI-agnostic inventory and point-of-sale ledger library**.
//! The CLI in `crates/till` is one possible client, not the application
//! itself.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Client (crates/till)                                    │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - Holds only a cached copy of the document                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: one method per named request                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validate → mutate → single save per operation            │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore over one whole JSON document          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, never writes to stdout/stderr, and never assumes a
//! terminal. The same core could serve a desktop shell or a web UI.
//!
//! ## Single-writer model
//!
//! One logical writer is assumed (single process, single interaction at a
//! time). Every operation is a synchronous read-modify-write of the whole
//! document; there is no locking and no concurrency.

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod paths;
pub mod store;
