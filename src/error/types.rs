//! Error types
//!
//! Defines the storage and authentication error types. Verification failures
//! are not errors: they surface as a not-found result from the verifier.

use std::fmt;

/// Errors raised by a `UserStore` implementation
#[derive(Debug)]
pub enum StoreError {
    Unavailable(String),
    QueryFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "User store unavailable: {}", msg),
            StoreError::QueryFailed(msg) => write!(f, "User store query failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// General error for credential operations and configuration loading
#[derive(Debug)]
pub enum AuthError {
    Store(StoreError),
    Config(config::ConfigError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Store(e) => write!(f, "Storage error: {}", e),
            AuthError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Store(e) => Some(e),
            AuthError::Config(e) => Some(e),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(error: StoreError) -> Self {
        AuthError::Store(error)
    }
}

impl From<config::ConfigError> for AuthError {
    fn from(error: config::ConfigError) -> Self {
        AuthError::Config(error)
    }
}
