//! Data models
//!
//! Request and response shapes exchanged over HTTP. IDs are `i64`
//! (SQLite INTEGER PRIMARY KEY).

pub mod employee;

// Re-exports
pub use employee::*;
