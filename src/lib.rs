pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod store;
pub mod types;
pub mod utils;
pub mod workflow;
