//! Logging middleware
//!
//! Logging setup and the diagnostics emitted by the guard and the credential
//! flows. Passwords and hashes are never logged.

use log::{debug, info, warn};

use crate::middleware::guard::GuardDecision;

/// Setup logging (env_logger picks up RUST_LOG). Safe to call more than once.
pub fn setup_logging() {
    let _ = env_logger::try_init();
}

/// Log a request rejected by an access guard
pub fn log_access_denied(
    decision: GuardDecision,
    username: Option<&str>,
    request_id: Option<&str>,
) {
    let Some(line) = access_denied_line(decision, username, request_id) else {
        return;
    };

    match decision {
        GuardDecision::DeniedUnauthorized => warn!("{}", line),
        _ => info!("{}", line),
    }
}

fn access_denied_line(
    decision: GuardDecision,
    username: Option<&str>,
    request_id: Option<&str>,
) -> Option<String> {
    let line = match decision {
        GuardDecision::Allowed => return None,
        GuardDecision::DeniedUnauthenticated => {
            "Access denied: no authenticated session".to_string()
        }
        GuardDecision::DeniedUnauthorized => format!(
            "Unauthorized access attempt by {}",
            username.unwrap_or("<unknown>")
        ),
    };

    Some(match request_id {
        Some(id) => format!("[{}] {}", id, line),
        None => line,
    })
}

/// Log a failed credential check
pub fn log_failed_login(username: &str, reason: &str) {
    warn!("Login failed for {}: {}", username, reason);
}

/// Log a password change
pub fn log_password_updated(username: &str, rows: u64) {
    if rows == 0 {
        debug!("Password update for {} matched no users", username);
    } else {
        info!("Password updated for {}", username);
    }
}
