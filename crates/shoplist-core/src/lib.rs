//! Shoplist Core - state machine for a shared shopping list
//!
//! The core owns the in-memory item collection, enforces its invariants and
//! writes the whole collection to durable storage after every mutation.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │           ShoppingListService             │
//! │   RwLock<Vec<Item>>  (sole writer)        │
//! └──────────────────┬────────────────────────┘
//!                    │ save(full collection)
//!          ┌─────────▼─────────┐
//!          │   dyn Store       │
//!          ├───────────────────┤
//!          │ JsonFileStore     │  tmp file + rename
//!          │ MemoryStore       │  tests
//!          └───────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use shoplist_core::{MemoryStore, ShoppingListService};
//!
//! let service = ShoppingListService::open(Arc::new(MemoryStore::new())).unwrap();
//! assert!(service.add("milk").unwrap());
//! assert!(!service.add("milk").unwrap());
//! assert!(service.mark("milk", 3.5).unwrap());
//! assert_eq!(service.list().len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::{Result, ServiceError, StoreError};
pub use model::{validate_collection, Item};
pub use service::ShoppingListService;
pub use store::{JsonFileStore, MemoryStore, Store};

/// Default name of the persisted collection file
pub const DEFAULT_DATA_FILE: &str = "shopping_list.json";
