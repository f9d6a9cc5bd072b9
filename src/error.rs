use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// A single offending field reported by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {}", format_fields(.errors))]
    Validation { errors: Vec<FieldError> },

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("Store unreachable: {cause}")]
    ConnectionFailed { cause: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::Validation { errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "validation_failed".to_string(),
                    message: format!("Invalid payload: {}", format_fields(errors)),
                    fields: Some(errors.clone()),
                },
            ),
            ApiError::NotFound { what } => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "not_found".to_string(),
                    message: format!("{} not found", what),
                    fields: None,
                },
            ),
            ApiError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "bad_request".to_string(),
                    message: message.clone(),
                    fields: None,
                },
            ),
            ApiError::ConnectionFailed { cause } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse {
                    error: "connection_failed".to_string(),
                    message: format!("Store unreachable: {}", cause),
                    fields: None,
                },
            ),
            ApiError::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "io_error".to_string(),
                    message: err.to_string(),
                    fields: None,
                },
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "internal_error".to_string(),
                    message: msg.clone(),
                    fields: None,
                },
            ),
        };

        (status, Json(error_response)).into_response()
    }
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<tokio_postgres::Error> for ApiError {
    fn from(err: tokio_postgres::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for ApiError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        ApiError::ConnectionFailed {
            cause: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("Serialization error: {}", err))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = ApiError::Validation {
            errors: vec![
                FieldError::new("year", "must be between 1900 and 2100"),
                FieldError::new("seats", "must be between 1 and 9"),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("year"));
        assert!(msg.contains("seats"));
    }
}
