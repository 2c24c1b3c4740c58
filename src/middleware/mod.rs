//! Request middleware
//!
//! Provides the role-based access guard and logging.

pub mod guard;
pub mod logging;

pub use guard::{AccessGuard, Denial, GuardDecision, GuardMessages, authorize};
