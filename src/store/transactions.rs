use chrono::Utc;
use entity::sea_orm_active_enums::{TransactionKind, TransactionStatus};
use entity::{accounts, transactions};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::utils::pagination::PaginationQuery;

/// Records a new request in the `waiting` state.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    kind: TransactionKind,
    account_id: i32,
    amount: i64,
) -> Result<transactions::Model, DbErr> {
    let transaction = transactions::ActiveModel {
        kind: Set(kind),
        account_id: Set(account_id),
        amount: Set(amount),
        status: Set(TransactionStatus::Waiting),
        reference_id: Set(Uuid::new_v4().to_string()),
        created_at: Set(Utc::now().naive_utc()),
        resolved_at: Set(None),
        resolved_by: Set(None),
        ..Default::default()
    };

    transaction.insert(db).await
}

pub async fn find_by_id<C: ConnectionTrait>(
    db: &C,
    transaction_id: i32,
) -> Result<Option<transactions::Model>, DbErr> {
    transactions::Entity::find_by_id(transaction_id).one(db).await
}

fn resolution(status: TransactionStatus, employee_id: i32) -> transactions::ActiveModel {
    transactions::ActiveModel {
        status: Set(status),
        resolved_at: Set(Some(Utc::now().naive_utc())),
        resolved_by: Set(Some(employee_id)),
        ..Default::default()
    }
}

/// Moves one transaction out of `waiting`. The status guard sits in the
/// UPDATE itself, so of several concurrent callers only one sees `true`.
pub async fn claim<C: ConnectionTrait>(
    db: &C,
    transaction_id: i32,
    status: TransactionStatus,
    employee_id: i32,
) -> Result<bool, DbErr> {
    let result = transactions::Entity::update_many()
        .set(resolution(status, employee_id))
        .filter(transactions::Column::Id.eq(transaction_id))
        .filter(transactions::Column::Status.eq(TransactionStatus::Waiting))
        .exec(db)
        .await?;

    Ok(result.rows_affected == 1)
}

/// Declines every waiting transaction of an account; returns how many.
pub async fn decline_waiting_for_account<C: ConnectionTrait>(
    db: &C,
    account_id: i32,
    employee_id: i32,
) -> Result<u64, DbErr> {
    let result = transactions::Entity::update_many()
        .set(resolution(TransactionStatus::Decline, employee_id))
        .filter(transactions::Column::AccountId.eq(account_id))
        .filter(transactions::Column::Status.eq(TransactionStatus::Waiting))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// Waiting transactions of one kind across every account an employee
/// supervises, oldest first.
pub async fn list_waiting_for_supervisor<C: ConnectionTrait>(
    db: &C,
    employee_id: i32,
    kind: TransactionKind,
) -> Result<Vec<(transactions::Model, accounts::Model)>, DbErr> {
    let rows = transactions::Entity::find()
        .find_also_related(accounts::Entity)
        .filter(accounts::Column::SupervisorId.eq(employee_id))
        .filter(transactions::Column::Kind.eq(kind))
        .filter(transactions::Column::Status.eq(TransactionStatus::Waiting))
        .order_by_asc(transactions::Column::CreatedAt)
        .order_by_asc(transactions::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(transaction, account)| account.map(|a| (transaction, a)))
        .collect())
}

/// One page of an account's history for a kind, newest first, plus the
/// total number of matching rows.
pub async fn history_for_account<C: ConnectionTrait>(
    db: &C,
    account_id: i32,
    kind: TransactionKind,
    page: &PaginationQuery,
) -> Result<(Vec<transactions::Model>, u64), DbErr> {
    let query = transactions::Entity::find()
        .filter(transactions::Column::AccountId.eq(account_id))
        .filter(transactions::Column::Kind.eq(kind));

    let total = query.clone().count(db).await?;

    let rows = query
        .order_by_desc(transactions::Column::CreatedAt)
        .order_by_desc(transactions::Column::Id)
        .offset(page.get_offset())
        .limit(page.get_limit())
        .all(db)
        .await?;

    Ok((rows, total))
}
