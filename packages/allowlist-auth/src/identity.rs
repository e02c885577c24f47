//! Identity records: allow-list rows and the signed-in user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedIdentity {
    pub email: String,
    pub name: String,
    /// Free-form classification; carried through but never enforced.
    pub role: String,
}

impl AuthorizedIdentity {
    pub fn new(email: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role: role.into(),
        }
    }

    /// Case-insensitive email comparison.
    pub fn matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.trim().to_lowercase()
    }
}

/// Raw CSV row; every column is optional so short or ragged rows still load.
#[derive(Debug, Deserialize)]
pub(crate) struct AllowListRow {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl AllowListRow {
    /// Rows without a usable email are dropped.
    pub fn into_identity(self) -> Option<AuthorizedIdentity> {
        let email = self.email?.trim().to_string();
        if email.is_empty() {
            return None;
        }

        Some(AuthorizedIdentity {
            email,
            name: self.name.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
        })
    }
}

/// The identity held by an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl SessionIdentity {
    /// Start a session for an allow-listed identity with a fresh id.
    pub fn from_authorized(identity: &AuthorizedIdentity) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            role: identity.role.clone(),
        }
    }

    /// Name to greet the user with, falling back to the email.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignores_case_and_whitespace() {
        let identity = AuthorizedIdentity::new("Admin@Example.com", "Admin", "admin");
        assert!(identity.matches("admin@example.com"));
        assert!(identity.matches("  ADMIN@EXAMPLE.COM "));
        assert!(!identity.matches("admin@example.org"));
    }

    #[test]
    fn test_row_without_email_is_dropped() {
        let row = AllowListRow {
            email: Some("   ".to_string()),
            name: Some("Ghost".to_string()),
            role: None,
        };
        assert!(row.into_identity().is_none());

        let row = AllowListRow {
            email: None,
            name: Some("Ghost".to_string()),
            role: None,
        };
        assert!(row.into_identity().is_none());
    }

    #[test]
    fn test_session_identity_gets_fresh_id() {
        let identity = AuthorizedIdentity::new("a@example.com", "A", "viewer");
        let first = SessionIdentity::from_authorized(&identity);
        let second = SessionIdentity::from_authorized(&identity);

        assert_ne!(first.id, second.id);
        assert_eq!(first.email, "a@example.com");
        assert_eq!(first.role, "viewer");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let identity = AuthorizedIdentity::new("a@example.com", "", "viewer");
        let session = SessionIdentity::from_authorized(&identity);
        assert_eq!(session.display_name(), "a@example.com");
    }
}
