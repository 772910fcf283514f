use entity::sea_orm_active_enums::AccountKind;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Merchant,
    Employee,
    Manager,
}

impl Role {
    pub fn account_kind(self) -> Option<AccountKind> {
        match self {
            Role::Customer => Some(AccountKind::Customer),
            Role::Merchant => Some(AccountKind::Merchant),
            Role::Employee | Role::Manager => None,
        }
    }
}

impl From<AccountKind> for Role {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Customer => Role::Customer,
            AccountKind::Merchant => Role::Merchant,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Merchant => write!(f, "merchant"),
            Role::Employee => write!(f, "employee"),
            Role::Manager => write!(f, "manager"),
        }
    }
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub dob: Option<chrono::NaiveDate>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub email: String,
}
