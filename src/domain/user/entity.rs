//! User entity and related types

use serde::{Deserialize, Serialize};

/// User identifier - a plain integer key
///
/// Uniqueness within a directory is a caller convention; nothing in this
/// crate enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Create a new UserId
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record held by a directory
///
/// An immutable value. The password is stored verbatim: authentication is
/// an exact-match lookup, not credential verification. Two users are equal
/// when all three attributes are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Username for login
    username: String,
    /// Password, compared verbatim during authentication
    password: String,
}

impl User {
    /// Create a new user
    pub fn new(
        id: impl Into<UserId>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_value() {
        let id = UserId::new(1);
        assert_eq!(id.value(), 1);
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn test_user_id_conversions() {
        let id: UserId = 7.into();
        assert_eq!(i32::from(id), 7);
    }

    #[test]
    fn test_user_creation() {
        let user = User::new(1, "Ivan", "123");

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.username(), "Ivan");
        assert_eq!(user.password(), "123");
    }

    #[test]
    fn test_user_equality_requires_all_fields() {
        let user = User::new(1, "Ivan", "123");

        assert_eq!(user, User::new(1, "Ivan", "123"));
        assert_ne!(user, User::new(2, "Ivan", "123"));
        assert_ne!(user, User::new(1, "Petr", "123"));
        assert_ne!(user, User::new(1, "Ivan", "456"));
    }

    #[test]
    fn test_user_id_serializes_as_plain_integer() {
        let user = User::new(1, "Ivan", "123");

        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"username":"Ivan","password":"123"}"#);
    }
}
