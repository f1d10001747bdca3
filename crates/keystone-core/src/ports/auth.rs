//! Authentication ports: password hashing and opaque bearer tokens.

use async_trait::async_trait;
use uuid::Uuid;

/// The only token type this service issues.
pub const TOKEN_TYPE: &str = "Bearer";

/// A freshly minted bearer token.
///
/// `access_token` is the plaintext, returned to the caller exactly once.
/// It is not recoverable afterwards; the issuer stores only a digest.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
}

impl IssuedToken {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE,
        }
    }
}

/// Mints, revokes, and resolves opaque bearer tokens.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Generate a cryptographically random token bound to `user_id` and
    /// persist its association. Returns the plaintext once.
    async fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AuthError>;

    /// Delete the association for `token`. Idempotent: revoking an unknown
    /// or already-revoked token succeeds without effect.
    async fn revoke(&self, token: &str) -> Result<(), AuthError>;

    /// Map a presented bearer token to the user it authenticates, or `None`
    /// for unknown and revoked tokens.
    async fn resolve(&self, token: &str) -> Result<Option<Uuid>, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a slow, salted, one-way algorithm.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash. Comparison is timing-safe.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Invalid or revoked token")]
    InvalidToken,

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Token store error: {0}")]
    Backend(String),
}
