use crate::error::ServiceError;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::auth::Role;
use crate::workflow::caller::{EmployeeCaller, HolderCaller, ManagerCaller};

/// Only employees may act on client accounts and their transactions.
pub fn employee_caller(auth_user: &AuthenticatedUser) -> Result<EmployeeCaller, ServiceError> {
    match auth_user.role {
        Role::Employee => Ok(EmployeeCaller {
            employee_id: auth_user.id,
        }),
        _ => Err(ServiceError::not_authorized()),
    }
}

pub fn manager_caller(auth_user: &AuthenticatedUser) -> Result<ManagerCaller, ServiceError> {
    match auth_user.role {
        Role::Manager => Ok(ManagerCaller {
            manager_id: auth_user.id,
        }),
        _ => Err(ServiceError::not_authorized()),
    }
}

/// Trims and lowercases an email, rejecting anything without a local part
/// and a dotted domain.
pub fn normalize_email(email: &str) -> Result<String, ServiceError> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(email)
    } else {
        Err(ServiceError::validation("Invalid email format"))
    }
}

pub fn holder_caller(auth_user: &AuthenticatedUser) -> Result<HolderCaller, ServiceError> {
    auth_user
        .role
        .account_kind()
        .map(|kind| HolderCaller {
            account_id: auth_user.id,
            kind,
        })
        .ok_or_else(ServiceError::not_authorized)
}
