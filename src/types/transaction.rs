use crate::utils::money::from_minor_units;
use entity::sea_orm_active_enums::{AccountKind, TransactionKind, TransactionStatus};
use entity::{accounts, transactions};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TransactionRequest {
    pub amount: Decimal,
    /// Account password, re-entered to confirm a deposit.
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct AuthorizeRequest {
    pub accept: Option<bool>,
}

#[derive(Serialize)]
pub struct TransactionResponse {
    pub id: i32,
    pub kind: TransactionKind,
    pub account_id: i32,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub reference_id: String,
    pub date_created: chrono::NaiveDateTime,
    pub resolved_at: Option<chrono::NaiveDateTime>,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(transaction: transactions::Model) -> Self {
        Self {
            id: transaction.id,
            kind: transaction.kind,
            account_id: transaction.account_id,
            amount: from_minor_units(transaction.amount),
            status: transaction.status,
            reference_id: transaction.reference_id,
            date_created: transaction.created_at,
            resolved_at: transaction.resolved_at,
        }
    }
}

/// A waiting request as shown in an employee's queue.
#[derive(Serialize)]
pub struct PendingTransactionResponse {
    pub id: i32,
    pub client_id: i32,
    pub user_name: String,
    pub role: AccountKind,
    pub status: TransactionStatus,
    pub amount: Decimal,
    pub date_created: chrono::NaiveDateTime,
}

impl PendingTransactionResponse {
    pub fn new(transaction: transactions::Model, account: accounts::Model) -> Self {
        Self {
            id: transaction.id,
            client_id: account.id,
            user_name: account.user_name,
            role: account.kind,
            status: transaction.status,
            amount: from_minor_units(transaction.amount),
            date_created: transaction.created_at,
        }
    }
}
