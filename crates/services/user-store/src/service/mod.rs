//! Service layer - account workflows on top of the repository.

mod user_service;

pub use user_service::UserManager;
