//! Error handling
//!
//! Defines error types and handling for credential operations.

pub mod handlers;
pub mod types;

pub use types::*;
