pub mod account;
pub mod auth;
pub mod employee;
pub mod response;
pub mod transaction;
