//! # Flexa Shared
//!
//! Wire types for the HTTP API: request/response DTOs and error bodies.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, ValidationErrorResponse, ValidationIssue};
