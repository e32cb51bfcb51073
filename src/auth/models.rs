//! Authentication models

use serde::{Deserialize, Serialize};

/// The signed-in person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Name shown in headers and the profile card
    pub name: String,
    /// Email the user logged in with
    pub email: String,
    /// When the user signed in
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    /// Create a user from a login email.
    ///
    /// The display name is the local part of the email, or `fallback_name`
    /// when there is none.
    pub fn from_email(email: &str, fallback_name: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: display_name(email, fallback_name),
            email: email.to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}

fn display_name(email: &str, fallback_name: &str) -> String {
    let local = email.split('@').next().unwrap_or("").trim();
    if local.is_empty() {
        fallback_name.to_string()
    } else {
        local.to_string()
    }
}

/// Login credentials
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// User information handed to views
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_email() {
        let user = User::from_email("ada@example.com", "Student");
        assert_eq!(user.name, "ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_name_fallback() {
        assert_eq!(User::from_email("@example.com", "Student").name, "Student");
        assert_eq!(User::from_email("  ", "Learner").name, "Learner");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = User::from_email("a@b.com", "Student");
        let b = User::from_email("a@b.com", "Student");
        assert_ne!(a.id, b.id);
    }
}
