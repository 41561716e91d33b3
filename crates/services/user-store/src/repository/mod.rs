//! Repository layer for data access.

pub mod entities;
mod user_repository;

pub use entities::user::Column as UserColumn;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
