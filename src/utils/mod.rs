pub mod auth;
pub mod jwt;
pub mod money;
pub mod pagination;
pub mod password;
