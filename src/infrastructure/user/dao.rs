//! In-memory user persistence

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::user::{User, UserDao, UserId};
use crate::domain::DomainError;

/// In-memory implementation of UserDao
///
/// Backed by a map keyed by user id. Serves as the default backend when
/// no durable store is wired in.
#[derive(Debug, Default)]
pub struct InMemoryUserDao {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserDao {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let users = users.into_iter().map(|user| (user.id(), user)).collect();

        Self {
            users: RwLock::new(users),
        }
    }
}

impl UserDao for InMemoryUserDao {
    fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DomainError::storage("user store lock poisoned"))?;

        Ok(users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_existing_user() {
        let dao = InMemoryUserDao::with_users(vec![User::new(1, "Ivan", "123")]);

        assert!(dao.delete(UserId::new(1)).unwrap());
    }

    #[test]
    fn test_delete_missing_user() {
        let dao = InMemoryUserDao::new();

        assert!(!dao.delete(UserId::new(1)).unwrap());
    }

    #[test]
    fn test_second_delete_finds_nothing() {
        let dao = InMemoryUserDao::with_users(vec![User::new(1, "Ivan", "123")]);

        assert!(dao.delete(UserId::new(1)).unwrap());
        assert!(!dao.delete(UserId::new(1)).unwrap());
    }
}
