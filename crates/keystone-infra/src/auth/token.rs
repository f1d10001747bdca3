//! Opaque bearer token codec.
//!
//! A token is 32 bytes from the OS RNG, URL-safe base64 encoded, carrying a
//! fixed prefix so leaked tokens are recognizable in scanners. The server
//! never stores the plaintext; rows are keyed by the SHA-256 hex digest,
//! which is deterministic and therefore usable as a lookup key, and
//! preimage-resistant over a 256-bit random value.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

/// Prefix carried by every issued token plaintext.
pub const TOKEN_PREFIX: &str = "akt_";

/// Generate a fresh token plaintext.
pub fn generate_plaintext() -> String {
    let mut buf = [0u8; 32];
    OsRng.fill_bytes(&mut buf);
    format!("{TOKEN_PREFIX}{}", URL_SAFE_NO_PAD.encode(buf))
}

/// Digest of a token plaintext, as stored server-side.
pub fn digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaintexts_are_prefixed_and_unique() {
        let a = generate_plaintext();
        let b = generate_plaintext();

        assert!(a.starts_with(TOKEN_PREFIX));
        assert!(b.starts_with(TOKEN_PREFIX));
        assert_ne!(a, b);
    }

    #[test]
    fn digest_is_deterministic_and_distinct_from_plaintext() {
        let token = generate_plaintext();

        assert_eq!(digest(&token), digest(&token));
        assert_ne!(digest(&token), token);
        // SHA-256 hex
        assert_eq!(digest(&token).len(), 64);
    }
}
