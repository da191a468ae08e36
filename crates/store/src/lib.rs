//! Service Desk Store - persistence for requests and sessions.
//!
//! Everything the portal remembers lives under two keys of a key-value
//! substrate:
//!
//! - [`keys::REQUESTS`] - the whole request collection as one JSON array
//! - [`keys::CURRENT_USER`] - the logged-in user, or nothing
//!
//! Every write rewrites the whole collection. There is no locking across the
//! read-then-write pair, so two processes sharing a data directory can lose
//! each other's updates (last write wins).
//!
//! # Modules
//!
//! - [`substrate`] - The [`KeyValueStore`] trait with memory and file backends
//! - [`repository`] - The get-all / replace-all port the request store uses
//! - [`requests`] - [`RequestStore`]: listing, creation and status updates
//! - [`session`] - [`SessionStore`]: login, current user and logout
//! - [`seed`] - Demo users and the initial request set

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod repository;
pub mod requests;
pub mod seed;
pub mod session;
pub mod substrate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::StoreError;
pub use repository::{KvRequestRepository, RequestRepository};
pub use requests::RequestStore;
pub use session::{LoginTarget, SessionStore};
pub use substrate::{FileStore, KeyValueStore, MemoryStore};

/// Fixed storage keys.
pub mod keys {
    /// Key for the serialized request collection.
    pub const REQUESTS: &str = "esqm_requests";

    /// Key for the current session user.
    pub const CURRENT_USER: &str = "esqm_current_user";
}
