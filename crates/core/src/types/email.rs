//! Contact email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A user's contact address.
///
/// Addresses are either fixed for the demo accounts or derived from a typed
/// name, never entered directly, so no structural validation is applied.
///
/// ## Examples
///
/// ```
/// use service_desk_core::Email;
///
/// let derived = Email::for_display_name("John  Doe", Email::CAMPUS_DOMAIN);
/// assert_eq!(derived.as_str(), "john..doe@galgotias.edu.in");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Domain given to accounts created from a typed name.
    pub const CAMPUS_DOMAIN: &'static str = "galgotias.edu.in";

    /// Wrap a known address.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Derive an address from a display name.
    ///
    /// The name is lowercased and every whitespace character becomes a `.`,
    /// so `"Priya Singh"` turns into `priya.singh@<domain>`. Leading and
    /// trailing whitespace is converted too.
    #[must_use]
    pub fn for_display_name(name: &str, domain: &str) -> Self {
        let local: String = name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { '.' } else { c })
            .collect();
        Self(format!("{local}@{domain}"))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_for_display_name() {
        let email = Email::for_display_name("Priya Singh", Email::CAMPUS_DOMAIN);
        assert_eq!(email.as_str(), "priya.singh@galgotias.edu.in");
    }

    #[test]
    fn test_for_display_name_replaces_each_whitespace_char() {
        let email = Email::for_display_name(" A\tB  C", "x.edu");
        assert_eq!(email.as_str(), ".a.b..c@x.edu");
    }

    #[test]
    fn test_for_display_name_accepts_any_name() {
        let long = "a".repeat(300);
        let email = Email::for_display_name(&long, Email::CAMPUS_DOMAIN);
        assert!(email.as_str().len() > 300);

        let at = Email::for_display_name("@home", Email::CAMPUS_DOMAIN);
        assert_eq!(at.as_str(), "@home@galgotias.edu.in");
    }

    #[test]
    fn test_serde_is_a_plain_string() {
        let email = Email::new("user@example.com");
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");
    }
}
