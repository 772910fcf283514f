use entity::sea_orm_active_enums::{AccountKind, TransactionKind, TransactionStatus};
use entity::{accounts, transactions};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde::Serialize;

use crate::error::ServiceError;
use crate::store;
use crate::utils::money::from_minor_units;
use crate::workflow::caller::EmployeeCaller;
use crate::workflow::finish;

#[derive(Debug, Clone, Copy)]
pub struct ResolveRequest {
    pub transaction_id: i32,
    /// When set, a transaction of another kind is reported as not found.
    pub kind: Option<TransactionKind>,
    pub accept: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub transaction_id: i32,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub account_id: i32,
    pub account_kind: AccountKind,
    pub amount: rust_decimal::Decimal,
    pub balance_after: rust_decimal::Decimal,
}

/// Accepts or declines a waiting transaction on behalf of the employee who
/// supervises its account.
///
/// The status claim and the balance change commit together or not at all.
/// A withdraw that the balance no longer covers rolls the claim back and
/// leaves the transaction `waiting`.
pub async fn resolve(
    db: &DatabaseConnection,
    caller: &EmployeeCaller,
    request: ResolveRequest,
) -> Result<Resolution, ServiceError> {
    let txn = db.begin().await?;
    let outcome = resolve_in(&txn, caller, request).await;
    let resolution = finish(txn, outcome).await?;

    log::info!(
        "Employee {} set {} {} on account {} to {}",
        caller.employee_id,
        resolution.kind,
        resolution.transaction_id,
        resolution.account_id,
        resolution.status
    );

    Ok(resolution)
}

async fn resolve_in(
    txn: &DatabaseTransaction,
    caller: &EmployeeCaller,
    request: ResolveRequest,
) -> Result<Resolution, ServiceError> {
    let transaction = store::transactions::find_by_id(txn, request.transaction_id)
        .await?
        .filter(|t| request.kind.map_or(true, |kind| t.kind == kind))
        .ok_or(ServiceError::NotFound("Transaction"))?;

    if transaction.status.is_terminal() {
        return Err(ServiceError::AlreadyResolved);
    }

    let account = store::accounts::find_by_id(txn, transaction.account_id)
        .await?
        .ok_or(ServiceError::NotFound("Account"))?;

    if account.supervisor_id != caller.employee_id {
        log::warn!(
            "Employee {} tried to resolve transaction {} of account {} supervised by {}",
            caller.employee_id,
            transaction.id,
            account.id,
            account.supervisor_id
        );
        return Err(ServiceError::not_authorized());
    }

    settle(txn, caller, transaction, account, request.accept).await
}

/// Claims `transaction` out of `waiting` and applies its balance effect.
/// The models may be stale; the conditional updates decide, so a claim lost
/// to a concurrent caller surfaces as `AlreadyResolved`.
async fn settle(
    txn: &DatabaseTransaction,
    caller: &EmployeeCaller,
    transaction: transactions::Model,
    account: accounts::Model,
    accept: bool,
) -> Result<Resolution, ServiceError> {
    // Locks the transaction row, then the account row below.
    let status = TransactionStatus::resolved(accept);
    if !store::transactions::claim(txn, transaction.id, status, caller.employee_id).await? {
        return Err(ServiceError::AlreadyResolved);
    }

    if accept {
        let applied = match transaction.kind {
            TransactionKind::Deposit => {
                store::accounts::credit(txn, account.id, transaction.amount).await?
            }
            TransactionKind::Withdraw => {
                store::accounts::debit_if_covered(txn, account.id, transaction.amount).await?
            }
        };
        if !applied {
            return Err(match transaction.kind {
                TransactionKind::Withdraw => ServiceError::InsufficientFunds(account.kind),
                TransactionKind::Deposit => ServiceError::NotFound("Account"),
            });
        }
    }

    let balance_after = store::accounts::find_by_id(txn, account.id)
        .await?
        .map_or(account.balance, |current| current.balance);

    Ok(Resolution {
        transaction_id: transaction.id,
        kind: transaction.kind,
        status,
        account_id: account.id,
        account_kind: account.kind,
        amount: from_minor_units(transaction.amount),
        balance_after: from_minor_units(balance_after),
    })
}
