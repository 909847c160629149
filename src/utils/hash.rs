// src/utils/hash.rs

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use crate::error::AppError;

/// Hashes a password with Argon2id and a fresh random salt (PHC string format).
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Checks a password against a stored hash.
///
/// A mismatch is `Ok(false)`; a corrupt stored hash is an error.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::InternalServerError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("student123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("student123", &hash).unwrap());
        assert!(!verify_password("student124", &hash).unwrap());
    }

    #[test]
    fn test_corrupt_hash_is_an_error() {
        assert!(verify_password("student123", "plaintext").is_err());
    }
}
