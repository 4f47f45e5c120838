//! Password hashing and session tokens
//!
//! Minimal account security: salted SHA-256 password digests stored as
//! `salt$hash`, and opaque random session tokens with a 24-hour lifetime.
//! Session rows themselves live in `database::UserRepository`.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Sessions expire this many hours after creation
pub const SESSION_TTL_HOURS: i64 = 24;

/// Hash a password under a fresh random salt, returns `salt$hash`
pub fn new_password_hash(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{}${}", salt, digest(&salt, password))
}

/// Check a password against a stored `salt$hash` string
pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, hash)) => digest(salt, password) == hash,
        None => false,
    }
}

/// Mint an opaque session token
pub fn new_session_token() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_round_trip() {
        let stored = new_password_hash("hunter2");
        assert!(verify_password("hunter2", &stored));
        assert!(!verify_password("hunter3", &stored));
    }

    #[test]
    fn test_same_password_different_salts() {
        assert_ne!(new_password_hash("secret"), new_password_hash("secret"));
    }

    #[test]
    fn test_malformed_stored_hash_rejected() {
        assert!(!verify_password("anything", "no-separator-here"));
    }

    #[test]
    fn test_tokens_are_opaque_and_unique() {
        let a = new_session_token();
        let b = new_session_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }
}
