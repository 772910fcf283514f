use crate::constants;
use crate::error::ServiceError;
use bcrypt::{hash, verify};

pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    hash(password, constants::config::get_bcrypt_cost()).map_err(|e| {
        log::error!("Password hashing error: {}", e);
        ServiceError::Internal("Error processing password".to_string())
    })
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, ServiceError> {
    verify(password, password_hash).map_err(|e| {
        log::error!("Password verification error: {}", e);
        ServiceError::Internal("Error verifying password".to_string())
    })
}
