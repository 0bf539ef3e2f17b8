//! Core: configuration, state, server, errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, StorageBackend};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::{EmployeeStore, ServerState};
