use chrono::Utc;
use entity::accounts;
use entity::sea_orm_active_enums::AccountKind;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

pub struct NewAccount {
    pub kind: AccountKind,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub dob: Option<chrono::NaiveDate>,
    pub supervisor_id: i32,
}

pub async fn find_by_id<C: ConnectionTrait>(
    db: &C,
    account_id: i32,
) -> Result<Option<accounts::Model>, DbErr> {
    accounts::Entity::find_by_id(account_id).one(db).await
}

pub async fn find_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<accounts::Model>, DbErr> {
    accounts::Entity::find()
        .filter(accounts::Column::Email.eq(email))
        .one(db)
        .await
}

pub async fn list_supervised_by<C: ConnectionTrait>(
    db: &C,
    employee_id: i32,
) -> Result<Vec<accounts::Model>, DbErr> {
    accounts::Entity::find()
        .filter(accounts::Column::SupervisorId.eq(employee_id))
        .order_by_asc(accounts::Column::Id)
        .all(db)
        .await
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    new_account: NewAccount,
) -> Result<accounts::Model, DbErr> {
    let now = Utc::now().naive_utc();
    let account = accounts::ActiveModel {
        kind: Set(new_account.kind),
        user_name: Set(new_account.user_name),
        email: Set(new_account.email),
        password_hash: Set(new_account.password_hash),
        phone_number: Set(new_account.phone_number),
        address: Set(new_account.address),
        dob: Set(new_account.dob),
        balance: Set(0),
        supervisor_id: Set(new_account.supervisor_id),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    account.insert(db).await
}

/// Adds `amount` to the balance. Returns false when the account is gone.
pub async fn credit<C: ConnectionTrait>(db: &C, account_id: i32, amount: i64) -> Result<bool, DbErr> {
    let result = accounts::Entity::update_many()
        .col_expr(
            accounts::Column::Balance,
            Expr::col(accounts::Column::Balance).add(amount),
        )
        .col_expr(accounts::Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
        .filter(accounts::Column::Id.eq(account_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected == 1)
}

/// Subtracts `amount` only while the balance still covers it, so the check
/// and the write are one statement. Returns false when nothing was debited.
pub async fn debit_if_covered<C: ConnectionTrait>(
    db: &C,
    account_id: i32,
    amount: i64,
) -> Result<bool, DbErr> {
    let result = accounts::Entity::update_many()
        .col_expr(
            accounts::Column::Balance,
            Expr::col(accounts::Column::Balance).sub(amount),
        )
        .col_expr(accounts::Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
        .filter(accounts::Column::Id.eq(account_id))
        .filter(accounts::Column::Balance.gte(amount))
        .exec(db)
        .await?;

    Ok(result.rows_affected == 1)
}

pub async fn set_active<C: ConnectionTrait>(
    db: &C,
    account: accounts::Model,
    is_active: bool,
) -> Result<accounts::Model, DbErr> {
    let mut active_account: accounts::ActiveModel = account.into();
    active_account.is_active = Set(is_active);
    active_account.updated_at = Set(Utc::now().naive_utc());
    active_account.update(db).await
}

pub async fn update_contact<C: ConnectionTrait>(
    db: &C,
    account: accounts::Model,
    address: Option<String>,
    phone_number: Option<String>,
) -> Result<accounts::Model, DbErr> {
    let mut active_account: accounts::ActiveModel = account.into();
    if let Some(address) = address {
        active_account.address = Set(Some(address));
    }
    if let Some(phone_number) = phone_number {
        active_account.phone_number = Set(Some(phone_number));
    }
    active_account.updated_at = Set(Utc::now().naive_utc());
    active_account.update(db).await
}
