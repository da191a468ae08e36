//! Human-facing queue numbers.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::category::RequestCategory;

/// Display identifier handed to the student, e.g. `A-102`.
///
/// Scoped per category: the numeric part counts requests already filed in
/// the same category, starting at 101. Two categories sharing a prefix letter
/// can produce the same queue number, so this is never used as a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueNumber(String);

impl QueueNumber {
    /// First suffix handed out in an empty category, minus one.
    pub const BASE: usize = 100;

    /// Queue number for a new request given how many requests already exist
    /// in its category.
    #[must_use]
    pub fn assign(category: RequestCategory, prior_in_category: usize) -> Self {
        Self(format!(
            "{}-{}",
            category.queue_prefix(),
            Self::BASE + prior_in_category + 1
        ))
    }

    /// Wrap a queue number loaded from storage.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the queue number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
