//! In-memory token issuer.
//!
//! Fallback when no database is configured, and the backing store for
//! integration tests. Mirrors the Postgres issuer: only digests are kept.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use keystone_core::domain::AccessToken;
use keystone_core::ports::{AuthError, IssuedToken, TokenIssuer};

use super::token;

/// Token issuer backed by a process-local map.
#[derive(Default)]
pub struct InMemoryTokenIssuer {
    rows: RwLock<HashMap<String, AccessToken>>,
}

impl InMemoryTokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenIssuer for InMemoryTokenIssuer {
    async fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AuthError> {
        let plaintext = token::generate_plaintext();
        let record = AccessToken::new(user_id, token::digest(&plaintext));

        self.rows
            .write()
            .await
            .insert(record.token_hash.clone(), record);

        Ok(IssuedToken::new(plaintext))
    }

    async fn revoke(&self, presented: &str) -> Result<(), AuthError> {
        // Removing a missing key is the idempotent no-op case.
        self.rows.write().await.remove(&token::digest(presented));
        Ok(())
    }

    async fn resolve(&self, presented: &str) -> Result<Option<Uuid>, AuthError> {
        let mut rows = self.rows.write().await;
        Ok(rows.get_mut(&token::digest(presented)).map(|record| {
            record.last_used_at = Some(Utc::now());
            record.user_id
        }))
    }
}
