//! User directory service

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{User, UserDao, UserId};
use crate::domain::DomainError;

/// In-process directory of user records
///
/// Owns an insertion-ordered collection of users and delegates durable
/// deletion to a [`UserDao`] backend. The directory itself is transient:
/// it lives only as long as the service instance, and deleting through
/// the backend never prunes it. The collection and the backend store are
/// independent and never reconciled.
#[derive(Debug)]
pub struct UserDirectoryService<D: UserDao> {
    users: Vec<User>,
    dao: Arc<D>,
}

impl<D: UserDao> UserDirectoryService<D> {
    /// Create a new service with an empty directory
    pub fn new(dao: Arc<D>) -> Self {
        Self {
            users: Vec::new(),
            dao,
        }
    }

    /// Append the given users to the directory, in the order supplied
    ///
    /// Returns true when the directory grew. Duplicate ids and usernames
    /// are accepted as-is; the directory enforces no uniqueness.
    pub fn register(&mut self, users: Vec<User>) -> bool {
        let added = users.len();
        self.users.extend(users);

        if added > 0 {
            debug!(count = added, total = self.users.len(), "Registered users");
        }

        added > 0
    }

    /// All users currently in the directory, in insertion order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Number of users in the directory
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Authenticate a user with username and password
    ///
    /// Scans the directory in insertion order and returns the first user
    /// whose username and password both match exactly, or `Ok(None)` when
    /// no user matches. Fails when either argument is absent; the scan is
    /// never reached in that case.
    pub fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<User>, DomainError> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(DomainError::invalid_argument("username or password is null"));
        };

        let user = self
            .users
            .iter()
            .find(|user| user.username() == username && user.password() == password)
            .cloned();

        debug!(username, found = user.is_some(), "Authentication attempt");

        Ok(user)
    }

    /// Snapshot of the directory keyed by user id
    ///
    /// Rebuilt from the current directory on every call. When several
    /// records share an id, the one registered last wins.
    pub fn index_by_id(&self) -> HashMap<UserId, User> {
        self.users
            .iter()
            .map(|user| (user.id(), user.clone()))
            .collect()
    }

    /// Delete a user from the persistence backend
    ///
    /// Pass-through to [`UserDao::delete`]: the id goes to the backend
    /// unchanged, the verdict comes back unchanged, and backend errors
    /// propagate to the caller as-is. The in-memory directory is left
    /// untouched.
    pub fn delete(&self, user_id: UserId) -> Result<bool, DomainError> {
        info!(id = %user_id, "Deleting user from backend");
        self.dao.delete(user_id)
    }
}
