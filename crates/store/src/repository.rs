//! Request collection port.
//!
//! The request store reads and writes the collection only through
//! [`RequestRepository`], so a backend with real transactions or
//! compare-and-swap can replace the whole-blob implementation without touching
//! the store.

use tracing::{debug, warn};

use service_desk_core::ServiceRequest;

use crate::{KeyValueStore, StoreError, keys};

/// Whole-collection access to stored requests.
pub trait RequestRepository: Send + Sync {
    /// Whether a collection has ever been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn is_initialized(&self) -> Result<bool, StoreError>;

    /// Every stored request, in storage order (newest submission first).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_all(&self) -> Result<Vec<ServiceRequest>, StoreError>;

    /// Replace the stored collection with `requests`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    fn replace_all(&self, requests: &[ServiceRequest]) -> Result<(), StoreError>;
}

/// [`RequestRepository`] storing the collection as one JSON array under
/// [`keys::REQUESTS`].
#[derive(Debug, Clone)]
pub struct KvRequestRepository<S> {
    kv: S,
}

impl<S: KeyValueStore> KvRequestRepository<S> {
    /// Create a repository over `kv`.
    #[must_use]
    pub const fn new(kv: S) -> Self {
        Self { kv }
    }
}

impl<S: KeyValueStore> RequestRepository for KvRequestRepository<S> {
    fn is_initialized(&self) -> Result<bool, StoreError> {
        Ok(self
            .kv
            .get_item(keys::REQUESTS)?
            .is_some_and(|blob| !blob.is_empty()))
    }

    fn get_all(&self) -> Result<Vec<ServiceRequest>, StoreError> {
        let Some(blob) = self.kv.get_item(keys::REQUESTS)? else {
            debug!("No request collection stored");
            return Ok(Vec::new());
        };

        // A corrupted blob is indistinguishable from an empty store.
        match serde_json::from_str(&blob) {
            Ok(requests) => Ok(requests),
            Err(e) => {
                warn!(error = %e, "Stored request collection is malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn replace_all(&self, requests: &[ServiceRequest]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(requests)?;
        self.kv.set_item(keys::REQUESTS, &blob)?;
        debug!(count = requests.len(), "Replaced request collection");
        Ok(())
    }
}
