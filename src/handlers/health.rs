use actix_web::{web, HttpResponse};
use sea_orm::DatabaseConnection;

use crate::types::response::ApiResponse;

/// Liveness plus a round trip to the database; 503 while it is unreachable.
pub async fn health_check(db: web::Data<DatabaseConnection>) -> HttpResponse {
    match db.ping().await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse {
            message: "SBS banking backend is up, database reachable".to_string(),
            status: "healthy".to_string(),
        }),
        Err(e) => {
            log::error!("Health check failed to reach the database: {}", e);
            HttpResponse::ServiceUnavailable().json(ApiResponse {
                message: "Database unreachable".to_string(),
                status: "unhealthy".to_string(),
            })
        }
    }
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        message: "SBS banking backend: deposits and withdrawals approved by your account officer"
            .to_string(),
        status: "success".to_string(),
    })
}
