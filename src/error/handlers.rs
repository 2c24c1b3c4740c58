//! Error handlers
//!
//! Logging and HTTP status mapping for errors that reach the routing layer.

use crate::error::types::{AuthError, StoreError};
use log::error;

/// Handle an authentication error
pub fn handle_error(err: &AuthError) {
    error!("Authentication error: {}", err);
}

/// Convert error to the HTTP status the routing layer should answer with
pub fn error_to_http_status(err: &AuthError) -> u16 {
    match err {
        AuthError::Store(StoreError::Unavailable(_)) => 503,
        AuthError::Store(StoreError::QueryFailed(_)) => 500,
        AuthError::Config(_) => 500,
    }
}
