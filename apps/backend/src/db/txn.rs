//! Transaction wrapper for service operations.
//!
//! Every multi-step host action (score entry, round draw, round marking,
//! cup reset) runs through `with_txn` so the whole sequence commits or
//! rolls back as one.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::txn_policy;
use crate::error::AppError;

/// Execute a function within a database transaction.
///
/// Begins a transaction, runs the closure, then applies the process-wide
/// policy on Ok (commit in production, rollback under test harnesses) and
/// rolls back on Err.
pub async fn with_txn<R, F>(conn: &DatabaseConnection, f: F) -> Result<R, AppError>
where
    F: for<'a> FnOnce(
        &'a DatabaseTransaction,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<R, AppError>> + Send + 'a>,
    >,
{
    let txn = conn.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            match txn_policy::current() {
                txn_policy::TxnPolicy::CommitOnOk => {
                    txn.commit().await?;
                    Ok(val)
                }
                txn_policy::TxnPolicy::RollbackOnOk => {
                    txn.rollback().await?;
                    Ok(val)
                }
            }
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
