//! Argon2 password hashing adapter.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use keystone_core::ports::{AuthError, PasswordService};

/// Argon2id hasher with a per-hash random salt, serialized in PHC format.
/// Verification inside the crate is constant-time.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_rejects_wrong_password() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("correct horse battery").unwrap();
        assert_ne!(hash, "correct horse battery");
        assert!(service.verify("correct horse battery", &hash).unwrap());
        assert!(!service.verify("incorrect horse", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let service = Argon2PasswordService::new();

        let first = service.hash("password123").unwrap();
        let second = service.hash("password123").unwrap();

        assert_ne!(first, second);
        assert!(service.verify("password123", &first).unwrap());
        assert!(service.verify("password123", &second).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error_not_a_match() {
        let service = Argon2PasswordService::new();

        assert!(service.verify("password123", "not-a-phc-string").is_err());
    }
}
