//! # Stockpad Architecture
//!
//! Stockpad is a **UI-agnostic product inventory library**. The CLI in `main.rs`
//! is one client of it; the core never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                    │
//! │  - Parses arguments, renders tables/charts, exit codes     │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - InventoryApi facade: one method per user command        │
//! │  - Returns structured CmdResult values, never prints       │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Domain Layer (form.rs, query.rs, validate.rs, stats.rs)   │
//! │  - Dialog state machine, pure derive/validate/aggregate    │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - KvBackend trait: one key, whole list serialized         │
//! │  - FileBackend (production), MemoryBackend (testing)       │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation flow
//!
//! Every mutation goes through the same path: a raw [`model::ProductDraft`] is
//! validated by [`validate::validate`], the [`form::FormController`] applies the
//! resulting fields to the [`store::ProductStore`], and the store rewrites the
//! whole serialized list to its backend. Reads are derived views:
//! [`query::derive`] filters and sorts, [`stats`] aggregates. The store is an
//! explicitly constructed value handed to [`api::InventoryApi`]; there is no
//! ambient singleton.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`form`]: create/edit/delete-confirmation dialog state machine
//! - [`query`]: filter + sort derivation and the ephemeral view state
//! - [`validate`]: per-field validation of raw drafts
//! - [`stats`]: summary tallies, stock levels, chart datasets
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types (`Product` and friends)
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod query;
pub mod stats;
pub mod store;
pub mod validate;
