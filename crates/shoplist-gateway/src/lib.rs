//! Shoplist Gateway - remote procedure front end for the shopping list
//!
//! Exposes the list service over HTTP so several clients can share one list.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐  POST /rpc   ┌──────────────────────────────┐
//! │ shoplist   │ ───────────▶ │          Gateway             │
//! │ CLI /      │              │  axum router + TraceLayer    │
//! │ any client │ ◀─────────── │  spawn_blocking(dispatch)    │
//! └────────────┘  {"result"}  └──────────────┬───────────────┘
//!                                            │
//!                                 ┌──────────▼──────────┐
//!                                 │ ShoppingListService │
//!                                 └──────────┬──────────┘
//!                                            │
//!                                   shopping_list.json
//! ```
//!
//! # Procedures
//!
//! - `add_item {name}` → bool
//! - `list_items` → [Item]
//! - `mark_item {name, value}` → bool
//! - `mark_all {value}` → bool
//! - `remove_item {name}` → bool
//! - `monthly_total {year, month}` → number

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod rpc;

pub use client::GatewayClient;
pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use gateway::{Gateway, GatewayState};
pub use rpc::{ErrorCode, RpcError, RpcRequest, RpcResponse};

/// Gateway version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Default host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server URL used by clients
pub const DEFAULT_URL: &str = "http://localhost:8000";
