//! Portal user identity.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;
use super::status::Role;

/// Base URL for generated avatars.
const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// Errors that can occur when building a [`User`] from a typed name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// The name is empty or only whitespace.
    #[error("name cannot be empty")]
    EmptyName,
}

/// A logged-in portal user.
///
/// Never mutated after login; logging out simply forgets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: Email,
    /// Student or staff.
    pub role: Role,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Build a fresh user from a typed name.
    ///
    /// The display name is trimmed; the email and avatar seed use the name
    /// exactly as typed.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::EmptyName`] for a blank name.
    pub fn from_name(name: &str, role: Role) -> Result<Self, UserError> {
        let display_name = name.trim();
        if display_name.is_empty() {
            return Err(UserError::EmptyName);
        }

        Ok(Self {
            id: UserId::generate(),
            name: display_name.to_owned(),
            email: Email::for_display_name(name, Email::CAMPUS_DOMAIN),
            role,
            avatar: Some(format!("{AVATAR_BASE_URL}{name}")),
        })
    }

    /// Whether this user may triage requests.
    #[must_use]
    pub const fn is_reviewer(&self) -> bool {
        self.role.is_reviewer()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_derives_identity() {
        let user = User::from_name("Priya Singh", Role::Student).unwrap();
        assert_eq!(user.name, "Priya Singh");
        assert_eq!(user.email.as_str(), "priya.singh@galgotias.edu.in");
        assert_eq!(
            user.avatar.as_deref(),
            Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Priya Singh")
        );
        assert!(user.id.as_str().starts_with("u_"));
        assert!(!user.is_reviewer());
    }

    #[test]
    fn test_from_name_trims_only_the_display_name() {
        let user = User::from_name(" Priya Singh ", Role::Student).unwrap();
        assert_eq!(user.name, "Priya Singh");
        assert_eq!(user.email.as_str(), ".priya.singh.@galgotias.edu.in");
        assert_eq!(
            user.avatar.as_deref(),
            Some("https://api.dicebear.com/7.x/avataaars/svg?seed= Priya Singh ")
        );
    }

    #[test]
    fn test_from_name_accepts_unusual_names() {
        let long = "x".repeat(300);
        assert_eq!(User::from_name(&long, Role::Student).unwrap().name, long);

        let user = User::from_name("@admin", Role::Staff).unwrap();
        assert_eq!(user.email.as_str(), "@admin@galgotias.edu.in");
    }

    #[test]
    fn test_from_name_rejects_blank() {
        assert_eq!(User::from_name("   ", Role::Staff), Err(UserError::EmptyName));
    }

    #[test]
    fn test_two_fresh_users_get_distinct_ids() {
        let a = User::from_name("Same Name", Role::Student).unwrap();
        let b = User::from_name("Same Name", Role::Student).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_format_omits_missing_avatar() {
        let user = User {
            id: UserId::new("u_1"),
            name: "Test".to_owned(),
            email: Email::new("test@example.com"),
            role: Role::Staff,
            avatar: None,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "u_1",
                "name": "Test",
                "email": "test@example.com",
                "role": "STAFF",
            })
        );
    }
}
