//! Persistence helpers over the sea-orm entities.
//!
//! Every function takes any [`sea_orm::ConnectionTrait`] so the same call
//! works on the pooled connection or inside an open database transaction.

pub mod accounts;
pub mod employees;
pub mod managers;
pub mod transactions;

use sea_orm::{ConnectionTrait, DbErr};

/// Emails are unique across managers, employees and accounts because login
/// looks all three up by email.
pub async fn email_in_use<C: ConnectionTrait>(db: &C, email: &str) -> Result<bool, DbErr> {
    Ok(managers::find_by_email(db, email).await?.is_some()
        || employees::find_by_email(db, email).await?.is_some()
        || accounts::find_by_email(db, email).await?.is_some())
}
