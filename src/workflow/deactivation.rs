use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde::Serialize;

use crate::error::ServiceError;
use crate::store;
use crate::workflow::caller::EmployeeCaller;
use crate::workflow::finish;

#[derive(Debug, Clone, Serialize)]
pub struct StatusChange {
    pub account_id: i32,
    pub is_active: bool,
    /// Waiting transactions declined by this change.
    pub declined: u64,
}

/// Activates or deactivates an account. Deactivation declines every
/// waiting transaction of the account in the same database transaction;
/// balances are untouched.
pub async fn set_active(
    db: &DatabaseConnection,
    caller: &EmployeeCaller,
    account_id: i32,
    active: bool,
) -> Result<StatusChange, ServiceError> {
    let txn = db.begin().await?;
    let outcome = set_active_in(&txn, caller, account_id, active).await;
    let change = finish(txn, outcome).await?;

    log::info!(
        "Employee {} set account {} active={} ({} waiting transactions declined)",
        caller.employee_id,
        change.account_id,
        change.is_active,
        change.declined
    );

    Ok(change)
}

async fn set_active_in(
    txn: &DatabaseTransaction,
    caller: &EmployeeCaller,
    account_id: i32,
    active: bool,
) -> Result<StatusChange, ServiceError> {
    let account = store::accounts::find_by_id(txn, account_id)
        .await?
        .ok_or(ServiceError::NotFound("Account"))?;

    if account.supervisor_id != caller.employee_id {
        return Err(ServiceError::not_authorized());
    }

    // Transaction rows before the account row, the same lock order as `resolve`.
    let declined = if active {
        0
    } else {
        store::transactions::decline_waiting_for_account(txn, account.id, caller.employee_id)
            .await?
    };

    let account = store::accounts::set_active(txn, account, active).await?;

    Ok(StatusChange {
        account_id: account.id,
        is_active: account.is_active,
        declined,
    })
}
