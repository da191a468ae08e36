//! Command implementations.
//!
//! Every command writes its human-readable output to the supplied writer,
//! which is stdout in the binary and a buffer in tests.

pub mod render;
pub mod requests;
pub mod session;

use std::sync::Arc;
use std::time::Duration;

use mockable::{Clock, DefaultClock};
use thiserror::Error;

use service_desk_core::{User, UserError};
use service_desk_store::{
    FileStore, KeyValueStore, KvRequestRepository, RequestStore, SessionStore, StoreError,
};

use crate::config::DeskConfig;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Reading or writing the data directory failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// The typed name could not become a user.
    #[error("Invalid user: {0}")]
    InvalidUser(#[from] UserError),

    /// The command needs a logged-in user.
    #[error("Not logged in. Run `desk login` first")]
    NotLoggedIn,

    /// The logged-in user's role may not run this command.
    #[error("Forbidden: {0}")]
    Forbidden(&'static str),

    /// No request with the given id is visible to the user.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Request and session stores sharing one substrate.
pub struct Desk<S> {
    pub requests: RequestStore<KvRequestRepository<Arc<S>>>,
    pub session: SessionStore<Arc<S>>,
    pub submit_delay: Duration,
}

impl Desk<FileStore> {
    /// Open the file-backed desk described by `config`.
    #[must_use]
    pub fn open(config: &DeskConfig) -> Self {
        Self::new(
            Arc::new(FileStore::new(&config.data_dir)),
            Arc::new(DefaultClock),
            config.submit_delay,
        )
    }
}

impl<S: KeyValueStore> Desk<S> {
    /// Build a desk over any substrate.
    #[must_use]
    pub fn new(kv: Arc<S>, clock: Arc<dyn Clock>, submit_delay: Duration) -> Self {
        Self {
            requests: RequestStore::new(KvRequestRepository::new(Arc::clone(&kv)), clock),
            session: SessionStore::new(kv),
            submit_delay,
        }
    }

    /// The logged-in user, or [`CommandError::NotLoggedIn`].
    fn require_user(&self) -> Result<User, CommandError> {
        self.session
            .current_user()?
            .ok_or(CommandError::NotLoggedIn)
    }
}
