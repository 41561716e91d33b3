//! Domain layer - User entity, normalization rules and the identity hash.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod avatar;
pub mod error;
pub mod user;

pub use avatar::hash_email;
pub use error::{DomainError, DomainResult, UserKey};
pub use user::{normalize_email, User};
