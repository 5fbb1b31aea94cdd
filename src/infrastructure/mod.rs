//! Infrastructure layer - Concrete implementations

pub mod user;
