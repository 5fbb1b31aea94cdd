//! User infrastructure module
//!
//! Implementations backing the user domain: the in-memory persistence
//! store and the directory service itself.

mod dao;
mod service;

pub use dao::InMemoryUserDao;
pub use service::UserDirectoryService;
