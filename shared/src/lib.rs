//! Shared types for the employee API
//!
//! Wire-level types used by the server and by any client of it:
//! error codes and response bodies, request/response DTOs and the
//! field rules attached to them.

pub mod error;
pub mod models;
pub mod validation;
