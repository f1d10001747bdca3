use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted access-token record.
///
/// Only the digest of the token is kept; the plaintext exists exactly once,
/// in the response that issued it. The record is deleted on logout, after
/// which the token can never authenticate again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Create a new token record for a user from a precomputed digest.
    pub fn new(user_id: Uuid, token_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: Utc::now(),
            last_used_at: None,
        }
    }
}
