//! Infrastructure layer - database connection and transactions.

mod db;
pub mod unit_of_work;

pub use db::Database;
pub use unit_of_work::{Persistence, TransactionContext, TxUserStore};
