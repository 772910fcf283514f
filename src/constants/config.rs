use std::env;

const DEFAULT_JWT_SECRET: &str = "sbs-development-secret";

pub fn get_database_url() -> Result<String, env::VarError> {
    env::var("DATABASE_URL")
}

pub fn get_server_address() -> String {
    env::var("SERVER_ADDRESS")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

pub fn get_jwt_secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string())
}

pub fn is_default_jwt_secret() -> bool {
    env::var("JWT_SECRET").is_err()
}

pub fn get_jwt_expiry_hours() -> i64 {
    env::var("JWT_EXPIRY_HOURS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(24)
}

pub fn get_bcrypt_cost() -> u32 {
    env::var("BCRYPT_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(bcrypt::DEFAULT_COST)
}

pub fn get_cors_origin() -> String {
    env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Credentials for the manager created on first start.
pub struct BootstrapManager {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

pub fn get_bootstrap_manager() -> Option<BootstrapManager> {
    let email = env::var("MANAGER_EMAIL").ok()?;
    let password = env::var("MANAGER_PASSWORD").ok()?;
    let user_name = env::var("MANAGER_NAME").unwrap_or_else(|_| "manager".to_string());

    Some(BootstrapManager {
        user_name,
        email,
        password,
    })
}
