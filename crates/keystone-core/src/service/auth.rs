//! Login, logout, and bearer-token resolution.

use std::sync::Arc;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::{IssuedToken, PasswordService, TokenIssuer, UserRepository};

/// Login input: transient, never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Credential-to-token authentication flow.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Verify credentials and issue a fresh bearer token.
    ///
    /// Unknown email and wrong password both map to
    /// [`DomainError::InvalidCredentials`]; the caller cannot tell which
    /// check failed. Repeated logins each issue a new token.
    pub async fn login(&self, credentials: &Credentials) -> Result<IssuedToken, DomainError> {
        let user = self
            .users
            .find_by_email(&credentials.email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        let valid = self
            .passwords
            .verify(&credentials.password, &user.password_hash)?;
        if !valid {
            return Err(DomainError::InvalidCredentials);
        }

        Ok(self.tokens.issue(user.id).await?)
    }

    /// Revoke the presented token. The token is passed in explicitly by the
    /// HTTP layer after it has authenticated the caller; revocation is
    /// irreversible and idempotent.
    pub async fn logout(&self, token: &str) -> Result<(), DomainError> {
        Ok(self.tokens.revoke(token).await?)
    }

    /// Map a presented bearer token to the user it authenticates.
    ///
    /// Unknown and revoked tokens, and tokens whose user no longer exists,
    /// all surface as [`DomainError::Unauthenticated`].
    pub async fn authenticate(&self, token: &str) -> Result<User, DomainError> {
        let user_id = self
            .tokens
            .resolve(token)
            .await?
            .ok_or(DomainError::Unauthenticated)?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Unauthenticated)
    }
}
