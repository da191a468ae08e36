//! Session store: who is logged in.
//!
//! The session is an explicit value owned by the caller rather than state the
//! request store consults on its own. Request operations take the acting
//! user as an argument.

use tracing::{debug, info, instrument, warn};

use service_desk_core::{User, UserId};

use crate::{KeyValueStore, StoreError, keys, seed};

/// Who to log in as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginTarget {
    /// A demo account, resolved against [`seed::demo_users`].
    DemoId(UserId),
    /// A fully formed user, typically built with [`User::from_name`].
    User(User),
}

impl From<UserId> for LoginTarget {
    fn from(id: UserId) -> Self {
        Self::DemoId(id)
    }
}

impl From<User> for LoginTarget {
    fn from(user: User) -> Self {
        Self::User(user)
    }
}

/// Persisted login state under [`keys::CURRENT_USER`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    kv: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a session store over `kv`.
    #[must_use]
    pub const fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Log in and remember the user.
    ///
    /// An unknown demo id returns `Ok(None)` and leaves the current session
    /// as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the user cannot be persisted.
    #[instrument(skip(self, target))]
    pub fn login(&self, target: impl Into<LoginTarget>) -> Result<Option<User>, StoreError> {
        let user = match target.into() {
            LoginTarget::DemoId(id) => {
                let Some(user) = seed::find_demo_user(&id) else {
                    debug!(user_id = %id, "Unknown demo user, login ignored");
                    return Ok(None);
                };
                user
            }
            LoginTarget::User(user) => user,
        };

        let blob = serde_json::to_string(&user)?;
        self.kv.set_item(keys::CURRENT_USER, &blob)?;

        info!(user_id = %user.id, role = %user.role, "Logged in");
        Ok(Some(user))
    }

    /// The logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn current_user(&self) -> Result<Option<User>, StoreError> {
        let Some(blob) = self.kv.get_item(keys::CURRENT_USER)? else {
            return Ok(None);
        };

        match serde_json::from_str(&blob) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "Stored session is malformed, treating as logged out");
                Ok(None)
            }
        }
    }

    /// Forget the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.kv.remove_item(keys::CURRENT_USER)?;
        info!("Logged out");
        Ok(())
    }
}
