//! Integration tests for the service desk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p service-desk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `request_lifecycle` - Seeding, submission and triage against the file substrate
//! - `session` - Login state persisted across store instances
//! - `storage_layout` - The on-disk JSON layout and corruption handling

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::sync::Arc;

use mockable::Clock;
use service_desk_store::test_support::ManualClock;
use service_desk_store::{FileStore, KvRequestRepository, RequestStore, SessionStore};

/// Request store over the files in `dir`.
pub type FileRequestStore = RequestStore<KvRequestRepository<Arc<FileStore>>>;

/// Stores sharing one data directory, as a single CLI invocation sees them.
pub struct TestDesk {
    pub kv: Arc<FileStore>,
    pub requests: FileRequestStore,
    pub session: SessionStore<Arc<FileStore>>,
    pub clock: Arc<ManualClock>,
}

impl TestDesk {
    /// Open the data directory at `dir` with a manual clock.
    #[must_use]
    pub fn open(dir: &Path) -> Self {
        Self::open_with_clock(dir, Arc::new(ManualClock::fixed()))
    }

    /// Open the data directory at `dir` sharing an existing clock.
    #[must_use]
    pub fn open_with_clock(dir: &Path, clock: Arc<ManualClock>) -> Self {
        let kv = Arc::new(FileStore::new(dir));
        Self {
            requests: RequestStore::new(
                KvRequestRepository::new(Arc::clone(&kv)),
                Arc::clone(&clock) as Arc<dyn Clock>,
            ),
            session: SessionStore::new(Arc::clone(&kv)),
            kv,
            clock,
        }
    }
}
