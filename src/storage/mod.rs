//! User storage
//!
//! The store collaborator the credential flows query, plus an in-memory
//! implementation.

pub mod memory;
pub mod store;

pub use memory::MemoryUserStore;
pub use store::{UserRow, UserStore};
