//! Session role authorization and password credential verification.
//!
//! - [`middleware::AccessGuard`] gates requests on the session principal's roles.
//! - [`auth::CredentialHasher`] derives the stored password digest.
//! - [`auth::CredentialService`] sets passwords and verifies logins against a
//!   [`storage::UserStore`].

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod session;
pub mod storage;

pub use auth::{CredentialHasher, CredentialService, UserRecord, hash_password};
pub use crate::config::AuthConfig;
pub use error::{AuthError, StoreError};
pub use middleware::{AccessGuard, GuardDecision, authorize};
pub use session::{Principal, RequestContext, SessionPrincipal};
pub use storage::{MemoryUserStore, UserRow, UserStore};
