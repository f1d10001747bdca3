//! Flows - orchestration of the credential store, password hasher, and
//! token issuer. All collaborators are injected, so the flows can run
//! against any adapter set, including the in-memory fakes used in tests.

mod auth;
mod registration;

pub use auth::{AuthService, Credentials};
pub use registration::{NewUser, Registration, RegistrationService};

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory fakes for flow tests.

    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::domain::User;
    use crate::error::RepoError;
    use crate::ports::{
        AuthError, BaseRepository, IssuedToken, PasswordService, TokenIssuer, UserRepository,
    };

    #[derive(Default)]
    pub struct FakeUsers {
        rows: Mutex<HashMap<Uuid, User>>,
    }

    #[async_trait]
    impl BaseRepository<User, Uuid> for FakeUsers {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, user: User) -> Result<User, RepoError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.values().any(|u| u.email == user.email) {
                return Err(RepoError::Constraint("users_email_key".into()));
            }
            rows.insert(user.id, user.clone());
            Ok(user)
        }
    }

    #[async_trait]
    impl UserRepository for FakeUsers {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email == email)
                .cloned())
        }
    }

    /// Wrapper that hides existing rows from the advisory pre-check,
    /// simulating a concurrent registration landing between check and insert.
    pub struct RacyUsers(pub FakeUsers);

    #[async_trait]
    impl BaseRepository<User, Uuid> for RacyUsers {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
            self.0.find_by_id(id).await
        }

        async fn insert(&self, user: User) -> Result<User, RepoError> {
            self.0.insert(user).await
        }
    }

    #[async_trait]
    impl UserRepository for RacyUsers {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepoError> {
            Ok(None)
        }
    }

    /// Reversible stand-in for the real hasher; still never stores plaintext
    /// as-is, which is what the flow tests assert.
    pub struct FakePasswords;

    impl PasswordService for FakePasswords {
        fn hash(&self, password: &str) -> Result<String, AuthError> {
            Ok(format!("phc$fake${password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
            Ok(hash == format!("phc$fake${password}"))
        }
    }

    #[derive(Default)]
    pub struct FakeTokens {
        counter: AtomicU64,
        rows: Mutex<HashMap<String, Uuid>>,
    }

    #[async_trait]
    impl TokenIssuer for FakeTokens {
        async fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AuthError> {
            let n = self.counter.fetch_add(1, Ordering::Relaxed);
            let plaintext = format!("fake-token-{n}");
            self.rows.lock().unwrap().insert(plaintext.clone(), user_id);
            Ok(IssuedToken::new(plaintext))
        }

        async fn revoke(&self, token: &str) -> Result<(), AuthError> {
            self.rows.lock().unwrap().remove(token);
            Ok(())
        }

        async fn resolve(&self, token: &str) -> Result<Option<Uuid>, AuthError> {
            Ok(self.rows.lock().unwrap().get(token).copied())
        }
    }
}
