//! Authentication system
//!
//! Password hashing, password changes and credential verification.

pub mod credentials;
pub mod hasher;
pub mod results;

pub use credentials::CredentialService;
pub use hasher::{CredentialHasher, hash_password};
pub use results::{UserRecord, parse_roles};
