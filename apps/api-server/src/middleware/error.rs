//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use keystone_shared::ErrorResponse;
use std::fmt;

/// A single validation failure, tied to the field that caused it.
#[derive(Debug, Clone)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    /// Login failure. One message for both unknown-email and wrong-password,
    /// so callers cannot enumerate accounts.
    InvalidCredentials,
    Unauthorized,
    DuplicateEmail,
    NotFound(String),
    Internal(String),
    Validation(Vec<FieldError>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::DuplicateEmail => write!(f, "Duplicate email"),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation failed ({} errors)", errors.len()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::DuplicateEmail | AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::InvalidCredentials => ErrorResponse::unauthorized()
                .with_detail("The provided credentials are incorrect.")
                .with_field_error("email", "The provided credentials are incorrect."),
            AppError::Unauthorized => ErrorResponse::unauthorized().with_detail("Unauthenticated."),
            AppError::DuplicateEmail => {
                ErrorResponse::unprocessable("The email has already been taken.")
                    .with_field_error("email", "The email has already been taken.")
            }
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Internal(detail) => {
                // Full detail stays server-side.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
            AppError::Validation(errors) => {
                let mut response = ErrorResponse::unprocessable("Validation failed");
                for e in errors {
                    response = response.with_field_error(e.field, e.message.clone());
                }
                response
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<keystone_core::error::DomainError> for AppError {
    fn from(err: keystone_core::error::DomainError) -> Self {
        use keystone_core::error::DomainError;

        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::InvalidCredentials => AppError::InvalidCredentials,
            DomainError::DuplicateEmail => AppError::DuplicateEmail,
            DomainError::Unauthenticated => AppError::Unauthorized,
            DomainError::NotFound(entity) => AppError::NotFound(format!("{} not found", entity)),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<keystone_core::error::RepoError> for AppError {
    fn from(err: keystone_core::error::RepoError) -> Self {
        AppError::from(keystone_core::error::DomainError::from(err))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
