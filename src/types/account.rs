use crate::utils::money::from_minor_units;
use entity::accounts;
use entity::sea_orm_active_enums::AccountKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct AccountResponse {
    pub id: i32,
    pub role: AccountKind,
    pub user_name: String,
    pub email: String,
    pub balance: Decimal,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub dob: Option<chrono::NaiveDate>,
    pub supervisor: String,
    pub is_active: bool,
    pub date_created: chrono::NaiveDateTime,
}

impl AccountResponse {
    pub fn new(account: accounts::Model, supervisor: String) -> Self {
        Self {
            id: account.id,
            role: account.kind,
            user_name: account.user_name,
            email: account.email,
            balance: from_minor_units(account.balance),
            phone_number: account.phone_number,
            address: account.address,
            dob: account.dob,
            supervisor,
            is_active: account.is_active,
            date_created: account.created_at,
        }
    }
}

/// Row of an employee's client list.
#[derive(Serialize)]
pub struct AccountSummary {
    pub id: i32,
    pub role: AccountKind,
    pub user_name: String,
    pub email: String,
    pub balance: Decimal,
    pub is_active: bool,
}

impl From<accounts::Model> for AccountSummary {
    fn from(account: accounts::Model) -> Self {
        Self {
            id: account.id,
            role: account.kind,
            user_name: account.user_name,
            email: account.email,
            balance: from_minor_units(account.balance),
            is_active: account.is_active,
        }
    }
}

#[derive(Deserialize)]
pub struct UpdateAccountRequest {
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<bool>,
}
