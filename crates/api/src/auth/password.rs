//! Argon2id password hashing and the registration strength check.
//!
//! Hashes are stored as PHC strings, so the salt and parameters travel with
//! the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use coursehub_core::error::CoreError;

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// `Ok(false)` on mismatch; `Err` only when `hash` is not a valid PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Reject passwords shorter than `min_length` characters.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), CoreError> {
    if password.chars().count() < min_length {
        return Err(CoreError::Validation(format!(
            "Password must be at least {min_length} characters long"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("learn-rust-today").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("learn-rust-today", &hash).unwrap());
        assert!(!verify_password("learn-go-today", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn strength_boundary() {
        assert!(validate_password_strength("1234567", 8).is_err());
        assert!(validate_password_strength("12345678", 8).is_ok());
        let err = validate_password_strength("short", 8).unwrap_err();
        assert!(err.to_string().contains("at least 8 characters"));
    }
}
