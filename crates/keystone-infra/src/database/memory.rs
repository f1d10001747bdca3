//! In-memory credential store.
//!
//! Used when `DATABASE_URL` is not configured (development) and by the
//! integration tests. Enforces the same email uniqueness the Postgres
//! schema does, so the duplicate-registration path behaves identically.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use keystone_core::domain::User;
use keystone_core::error::RepoError;
use keystone_core::ports::{BaseRepository, UserRepository};

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;

        // Same failure the users_email_key constraint would produce.
        if rows.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("users_email_key".to_string()));
        }

        rows.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new("Test".into(), email.into(), "phc$hash".into())
    }

    #[tokio::test]
    async fn insert_and_find_back() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert(user("a@x.com")).await.unwrap();

        assert_eq!(
            repo.find_by_id(created.id).await.unwrap().unwrap().email,
            "a@x.com"
        );
        assert_eq!(
            repo.find_by_email("a@x.com").await.unwrap().unwrap().id,
            created.id
        );
        assert!(repo.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_hits_constraint() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("a@x.com")).await.unwrap();

        let err = repo.insert(user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }
}
