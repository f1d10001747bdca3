//! PostgreSQL adapters: user repository and token issuer.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use keystone_core::domain::{AccessToken, User};
use keystone_core::error::RepoError;
use keystone_core::ports::{AuthError, IssuedToken, TokenIssuer, UserRepository};

use super::entity::access_token::{self, Entity as AccessTokenEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;
use crate::auth::token;

/// PostgreSQL credential store.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = if local.len() > 1 {
            format!("{}***", &local[..1])
        } else {
            "***".to_string()
        };
        format!("{}{}", masked_local, domain)
    } else {
        "***".to_string()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

/// PostgreSQL-backed opaque token issuer.
pub struct PostgresTokenIssuer {
    db: DbConn,
}

impl PostgresTokenIssuer {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TokenIssuer for PostgresTokenIssuer {
    async fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AuthError> {
        let plaintext = token::generate_plaintext();
        let record = AccessToken::new(user_id, token::digest(&plaintext));

        let active_model: access_token::ActiveModel = record.into();
        active_model
            .insert(&self.db)
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        Ok(IssuedToken::new(plaintext))
    }

    async fn revoke(&self, presented: &str) -> Result<(), AuthError> {
        let result = AccessTokenEntity::delete_many()
            .filter(access_token::Column::TokenHash.eq(token::digest(presented)))
            .exec(&self.db)
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        // Zero rows affected: already revoked or never issued. Idempotent.
        if result.rows_affected == 0 {
            tracing::debug!("Revocation matched no token");
        }

        Ok(())
    }

    async fn resolve(&self, presented: &str) -> Result<Option<Uuid>, AuthError> {
        let found = AccessTokenEntity::find()
            .filter(access_token::Column::TokenHash.eq(token::digest(presented)))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Backend(e.to_string()))?;

        let Some(record) = found else {
            return Ok(None);
        };

        // Usage stamp is best effort; resolution does not fail on it.
        let stamp = access_token::ActiveModel {
            id: Set(record.id),
            last_used_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };
        if let Err(e) = stamp.update(&self.db).await {
            tracing::debug!("Failed to stamp last_used_at: {}", e);
        }

        Ok(Some(record.user_id))
    }
}
