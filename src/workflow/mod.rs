//! Employee-side state changes on client accounts.
//!
//! [`resolve`] accepts or declines one waiting deposit/withdraw request and
//! [`set_active`] toggles an account, declining its waiting requests when it
//! is switched off. Both run inside a single database transaction and guard
//! the `waiting` status in the UPDATE itself, so a request leaves `waiting`
//! at most once no matter how many callers race for it.

use sea_orm::DatabaseTransaction;

use crate::error::ServiceError;

pub mod authorization;
pub mod caller;
pub mod deactivation;

pub use authorization::{resolve, Resolution, ResolveRequest};
pub use caller::{EmployeeCaller, HolderCaller, ManagerCaller};
pub use deactivation::{set_active, StatusChange};

/// Commits on success, rolls back on failure.
pub(crate) async fn finish<T>(
    txn: DatabaseTransaction,
    outcome: Result<T, ServiceError>,
) -> Result<T, ServiceError> {
    match outcome {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(e) = txn.rollback().await {
                log::error!("Failed to roll back transaction: {}", e);
            }
            Err(err)
        }
    }
}
