//! # Flexa Core
//!
//! The domain layer of the Flexa API.
//! Credentials and tokens, plus the port the identity provider adapter implements.
//! Nothing in here performs I/O.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
