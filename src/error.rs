use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PmsError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{0} is not implemented")]
    NotImplemented(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl PmsError {
    pub fn room_not_found(number: &str) -> Self {
        Self::NotFound(format!("room {}", number))
    }

    pub fn reservation_not_found(id: &str) -> Self {
        Self::NotFound(format!("reservation {}", id))
    }
}

impl From<validator::ValidationErrors> for PmsError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Validation(e.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for PmsError {
    fn status_code(&self) -> StatusCode {
        match self {
            PmsError::NotFound(_) => StatusCode::NOT_FOUND,
            PmsError::InvalidTransition(_) | PmsError::Conflict(_) => StatusCode::CONFLICT,
            PmsError::Validation(_) => StatusCode::BAD_REQUEST,
            PmsError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            PmsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}
