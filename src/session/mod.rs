//! Session identity
//!
//! Principal and request context types consumed by the access guard. Session
//! creation and destruction belong to the web framework.

pub mod context;
pub mod principal;

pub use context::{RequestContext, SessionPrincipal};
pub use principal::Principal;
