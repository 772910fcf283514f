#![allow(dead_code)]

use entity::sea_orm_active_enums::{AccountKind, TransactionKind};
use entity::{accounts, employees, managers, transactions};
use migration::{Migrator, MigratorTrait};
use sbs_backend::store;
use sbs_backend::store::accounts::NewAccount;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub const PASSWORD: &str = "password123";

/// A freshly migrated in-memory database. One pooled connection keeps every
/// query on the same SQLite memory database.
pub async fn setup_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

fn test_hash() -> String {
    bcrypt::hash(PASSWORD, 4).expect("hash password")
}

/// One manager with two employees.
pub struct Bank {
    pub db: DatabaseConnection,
    pub manager: managers::Model,
    pub employee: employees::Model,
    pub other_employee: employees::Model,
}

pub async fn seed_bank() -> Bank {
    let db = setup_db().await;

    let manager = store::managers::insert(
        &db,
        "mia".to_string(),
        "mia@sbs.test".to_string(),
        test_hash(),
    )
    .await
    .expect("insert manager");

    let employee = store::employees::insert(
        &db,
        "eli".to_string(),
        "eli@sbs.test".to_string(),
        test_hash(),
        manager.id,
    )
    .await
    .expect("insert employee");

    let other_employee = store::employees::insert(
        &db,
        "ora".to_string(),
        "ora@sbs.test".to_string(),
        test_hash(),
        manager.id,
    )
    .await
    .expect("insert employee");

    Bank {
        db,
        manager,
        employee,
        other_employee,
    }
}

/// Opens an account supervised by `supervisor_id` holding `balance` minor units.
pub async fn open_account(
    db: &DatabaseConnection,
    kind: AccountKind,
    email: &str,
    supervisor_id: i32,
    balance: i64,
) -> accounts::Model {
    let account = store::accounts::insert(
        db,
        NewAccount {
            kind,
            user_name: email.split('@').next().unwrap_or(email).to_string(),
            email: email.to_string(),
            password_hash: test_hash(),
            phone_number: None,
            address: None,
            dob: None,
            supervisor_id,
        },
    )
    .await
    .expect("insert account");
    store::employees::increment_user_count(db, supervisor_id)
        .await
        .expect("bump user count");

    if balance > 0 {
        store::accounts::credit(db, account.id, balance)
            .await
            .expect("fund account");
    }
    reload_account(db, account.id).await
}

pub async fn request(
    db: &DatabaseConnection,
    kind: TransactionKind,
    account_id: i32,
    amount: i64,
) -> transactions::Model {
    store::transactions::insert(db, kind, account_id, amount)
        .await
        .expect("insert transaction")
}

pub async fn reload_account(db: &DatabaseConnection, account_id: i32) -> accounts::Model {
    store::accounts::find_by_id(db, account_id)
        .await
        .expect("query account")
        .expect("account exists")
}

pub async fn reload_transaction(db: &DatabaseConnection, transaction_id: i32) -> transactions::Model {
    store::transactions::find_by_id(db, transaction_id)
        .await
        .expect("query transaction")
        .expect("transaction exists")
}
