//! User Directory
//!
//! An in-process directory of user records with support for:
//! - Registration into an insertion-ordered, transient collection
//! - Exact-match authentication by username and password
//! - An on-demand index of the collection keyed by user id
//! - Deletion delegated to a pluggable persistence backend
//!
//! The directory never persists itself and is never pruned by deletion:
//! the in-memory collection and the persistence backend are independent.

pub mod domain;
pub mod infrastructure;

pub use domain::user::{User, UserDao, UserId};
pub use domain::DomainError;
pub use infrastructure::user::{InMemoryUserDao, UserDirectoryService};
