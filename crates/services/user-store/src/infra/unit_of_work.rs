//! Unit of Work pattern implementation.
//!
//! Manages the lifecycle of a single database transaction and hands out
//! repositories bound to it. A transaction is committed only when the
//! closure succeeds; any error, or dropping the transaction, rolls it back.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend,
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, IsolationLevel, QueryFilter,
    SqlErr, TransactionTrait,
};

use common::{AppError, AppResult};
use domain::User;

use crate::repository::entities::user::{self, ActiveModel, Entity as UserEntity};

/// Boxed future returned by transactional closures.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Transaction context providing repository access within a transaction.
///
/// The context borrows the transaction, so every repository obtained from it
/// works on the same unit of work.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserStore<'_> {
        TxUserStore::new(self.txn)
    }
}

/// Transaction runner over a shared connection pool.
#[derive(Clone)]
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Execute a closure within a read-committed transaction.
    pub async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::ReadCommitted, f).await
    }

    async fn execute_transaction<F, T>(&self, isolation: IsolationLevel, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        // SQLite has no per-transaction isolation settings
        let txn = match self.db.get_database_backend() {
            DatabaseBackend::Sqlite => self.db.begin().await?,
            _ => {
                self.db
                    .begin_with_config(Some(isolation), Some(AccessMode::ReadWrite))
                    .await?
            }
        };

        let result = f(TransactionContext::new(&txn)).await;

        match result {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
pub struct TxUserStore<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserStore<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Find user by exact (already normalized) email
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.txn)
            .await?;

        Ok(result.map(User::from))
    }

    /// Insert a prepared user and return the stored row.
    ///
    /// A unique-constraint violation on insert means another writer claimed
    /// the email first and is reported as `EmailAlreadyUsed`.
    pub async fn insert(&self, user: &User) -> AppResult<User> {
        let model = ActiveModel::for_insert(user)
            .insert(self.txn)
            .await
            .map_err(|e| insert_error(e, &user.email))?;

        Ok(User::from(model))
    }
}

fn insert_error(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::email_already_used(email),
        _ => AppError::from(err),
    }
}

/// Run a block inside a transaction of the given `Persistence`.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
