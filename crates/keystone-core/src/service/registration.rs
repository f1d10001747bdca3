//! Account creation.

use std::sync::Arc;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::{IssuedToken, PasswordService, TokenIssuer, UserRepository};

/// Registration input, already shape-validated by the HTTP layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A created account plus its first bearer token.
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: User,
    pub token: IssuedToken,
}

/// Registration flow.
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenIssuer>,
}

impl RegistrationService {
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

    /// Create an account and issue its first token.
    ///
    /// The email pre-check is advisory only. Two registrations racing past it
    /// are serialized by the store's unique constraint, whose violation comes
    /// back as [`DomainError::DuplicateEmail`] as well.
    pub async fn register(&self, input: NewUser) -> Result<Registration, DomainError> {
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(DomainError::DuplicateEmail);
        }

        let password_hash = self.passwords.hash(&input.password)?;
        let user = User::new(input.name, input.email, password_hash);
        let user = self.users.insert(user).await?;

        let token = self.tokens.issue(user.id).await?;

        Ok(Registration { user, token })
    }
}
