//! Utilities
//!
//! - [`logger`]: tracing subscriber setup
//! - [`validation`]: request validation

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCode};
