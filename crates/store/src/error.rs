//! Store error type.
//!
//! Only the substrate can fail. Missing records, unknown ids and corrupted
//! blobs are not errors; the store reports them as `None` or an empty list.

use thiserror::Error;

/// Errors that can occur while reading or writing the substrate.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be read or written.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        /// Key being accessed.
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the substrate.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// A record could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_owned(),
            source,
        }
    }
}
