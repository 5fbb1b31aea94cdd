//! User persistence trait

use crate::domain::error::DomainError;

use super::entity::UserId;

#[cfg(test)]
use mockall::automock;

/// Persistence backend the directory delegates deletions to
///
/// The directory service treats implementations as a black box: the
/// returned flag is passed through unvalidated and errors are never
/// caught locally.
#[cfg_attr(test, automock)]
pub trait UserDao: Send + Sync {
    /// Delete the user with the given id from the backing store
    ///
    /// Returns true when a record was deleted, false when nothing matched.
    /// Fails when the backing store cannot be reached.
    fn delete(&self, id: UserId) -> Result<bool, DomainError>;
}
