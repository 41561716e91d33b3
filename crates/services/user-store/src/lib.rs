//! User Store Library
//!
//! Persistence for user accounts: lookups by id and email, uniqueness checks,
//! transactional creation and column-scoped updates.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::AppResult;
use tracing::info;

use crate::config::UserStoreConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Connect using `config` and build the store and its service.
pub async fn connect(
    config: &UserStoreConfig,
) -> AppResult<(Database, Arc<UserStore>, UserManager)> {
    let db = Database::connect(&config.database).await?;
    let store = Arc::new(UserStore::new(db.get_connection()));
    let manager = UserManager::new(store.clone());
    Ok((db, store, manager))
}

/// Create the users table if it is missing (for CLI commands).
pub async fn ensure_schema(config: &UserStoreConfig) -> AppResult<()> {
    let db = Database::connect_without_schema(&config.database).await?;
    db.ensure_schema().await?;
    info!("User schema is up to date");
    Ok(())
}

/// Check that the configured database answers (for CLI commands).
pub async fn ping(config: &UserStoreConfig) -> AppResult<()> {
    let db = Database::connect_without_schema(&config.database).await?;
    db.ping().await?;
    info!("Database is reachable");
    Ok(())
}
