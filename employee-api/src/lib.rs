//! Employee API - HTTP CRUD service for employee records
//!
//! # Module layout
//!
//! ```text
//! employee-api/src/
//! ├── core/     # configuration, state, server, startup errors
//! ├── api/      # routes, handlers, extractors, wire conversions
//! ├── db/       # stored records, repository contract, memory + SQLite backends
//! └── utils/    # logging, request validation
//! ```
//!
//! Wire shapes and the API error type come from the `shared` crate.

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

pub use core::{Config, Server, ServerState, StorageBackend};
pub use utils::logger::init_logger;
pub use utils::{AppError, AppResult, ErrorCode};
