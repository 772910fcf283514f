use actix_web::web;
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;
use crate::handlers::health::{health_check, index};

pub fn configure_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .service(crate::routes::auth::configure_auth_routes())
        .service(crate::routes::account::configure_account_routes())
        .service(crate::routes::employee::configure_employee_routes())
        .service(crate::routes::manager::configure_manager_routes())
}

/// Malformed JSON bodies get the same error envelope as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ServiceError::validation(err.to_string()).into())
}

/// Shared state, extractor config and routes. Used by `main` and by the
/// integration tests so both serve the same application.
pub fn configure_app(db: DatabaseConnection) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(db))
            .app_data(json_config())
            .service(configure_routes());
    }
}
