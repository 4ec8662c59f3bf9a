use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, msg) = match &self {
            AppError::BadRequest(s) => (StatusCode::BAD_REQUEST, s),
            AppError::NotFound(s) => (StatusCode::NOT_FOUND, s),
            AppError::Internal(s) => (StatusCode::INTERNAL_SERVER_ERROR, s),
        };
        (code, Json(ErrBody { error: msg.clone() })).into_response()
    }
}

// Conversion from the library error so handlers can use `?` directly.
impl From<crate::errors::VanguardError> for AppError {
    fn from(err: crate::errors::VanguardError) -> Self {
        match err {
            crate::errors::VanguardError::Config { message } => AppError::BadRequest(message),
            crate::errors::VanguardError::Validation { field, message } => {
                AppError::BadRequest(format!("Validation error for {field}: {message}"))
            }
            crate::errors::VanguardError::NotFound { resource, id } => {
                AppError::NotFound(format!("Resource '{resource}' with ID '{id}' not found"))
            }
            crate::errors::VanguardError::Ledger { operation, message } => {
                AppError::Internal(format!("Ledger {operation} failed: {message}"))
            }
            crate::errors::VanguardError::Serialization { context, source } => {
                AppError::Internal(format!("Serialization {context} failed: {source}"))
            }
            crate::errors::VanguardError::Io { operation, source } => {
                AppError::Internal(format!("I/O {operation} failed: {source}"))
            }
            crate::errors::VanguardError::LockPoisoned { resource } => {
                AppError::Internal(format!("Mutex for {resource} poisoned"))
            }
            crate::errors::VanguardError::Internal { message } => AppError::Internal(message),
        }
    }
}
