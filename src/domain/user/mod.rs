//! User domain
//!
//! Domain types for the user directory: the user entity, its identifier,
//! and the persistence contract deletion is delegated to.

mod dao;
mod entity;

pub use dao::UserDao;
pub use entity::{User, UserId};

#[cfg(test)]
pub use dao::MockUserDao;
