//! Domain-level error types.

use thiserror::Error;

use crate::ports::AuthError;

/// Domain errors - business logic failures surfaced by the flows.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Login failure. Deliberately carries no cause: unknown email and wrong
    /// password must be indistinguishable to the caller.
    #[error("The provided credentials are incorrect.")]
    InvalidCredentials,

    #[error("The email has already been taken.")]
    DuplicateEmail,

    /// Missing, unknown, or revoked bearer token.
    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Entity not found: {0}")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    /// Unique-constraint violation. The authoritative duplicate check for
    /// registration lives here, not in the advisory pre-check.
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(_) => DomainError::DuplicateEmail,
            RepoError::NotFound => DomainError::NotFound("record"),
            RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::Internal(msg),
        }
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingAuth | AuthError::InvalidToken => DomainError::Unauthenticated,
            AuthError::HashingError(msg) | AuthError::Backend(msg) => DomainError::Internal(msg),
        }
    }
}
