//! Argon2id password hashing. Hashes are stored as PHC strings, so the salt and
//! parameters travel with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

use crate::core::error::{AppError, Result};

/// Hash with a fresh salt. This is the only producer of `AppError::Internal`.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    fn verify(password: &str, hash: &str) -> bool {
        let parsed = PasswordHash::new(hash).unwrap();
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    #[test]
    fn test_hash_uses_argon2id_with_fresh_salt() {
        let hash = hash_password("colombo-2024").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, hash_password("colombo-2024").unwrap());
    }

    #[test]
    fn test_hash_verifies_only_the_right_password() {
        let hash = hash_password("colombo-2024").unwrap();
        assert!(verify("colombo-2024", &hash));
        assert!(!verify("kandy-2024", &hash));
    }
}
