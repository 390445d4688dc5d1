//! # Foco Architecture
//!
//! Foco is a **UI-agnostic document store** for focused writing sessions. A
//! document has a name, a text body, and the bookkeeping a writer cares about:
//! word count, accumulated working time, last edition time, a favorite flag
//! and an optional cover (an image or a solid color).
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, parses ids, applies configured defaults     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One unit of work per call, returns CmdResult             │
//! │  - List presentation via listing.rs and format.rs           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process;
//! diagnostics go through `tracing` and the CLI decides whether to show them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`listing`]: Sorting, filtering and selection for document lists
//! - [`format`]: Word count, working time and edition time labels
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Document`, `DocumentMetadata`, `Cover`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod listing;
pub mod model;
pub mod store;
