use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use entity::sea_orm_active_enums::AccountKind;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

const GENERIC_FAILURE: &str = "Ooops!! Something Went Wrong, Try again...";

/// Every failure a request can end in. None of these are retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Transaction already authorized")]
    AlreadyResolved,
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("The {0} does not have enough balance for this withdrawal")]
    InsufficientFunds(AccountKind),
    #[error("{0}")]
    Validation(String),
    #[error("store failure: {0}")]
    Store(#[from] DbErr),
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_authorized() -> Self {
        ServiceError::Unauthorized("You are not authorized")
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    /// The text sent to the client. Store details stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Store(_) | ServiceError::Internal(_) => GENERIC_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::AlreadyResolved
            | ServiceError::InsufficientFunds(_)
            | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Store(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("Request failed: {}", self);
        }

        HttpResponse::build(self.status_code()).json(json!({
            "message": self.public_message(),
            "status": "error"
        }))
    }
}
