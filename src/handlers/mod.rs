pub mod account_handler;
pub mod auth_handler;
pub mod employee_handler;
pub mod health;
pub mod manager_handler;
