use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::security::{AuthError, AuthResult};

/// Hash `password` with Argon2id and a random salt, returning the PHC string.
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AuthError::PasswordHash(err.to_string()))
}

/// Verify `password` against a PHC string produced by [`hash_password`].
pub fn verify_password(password: &str, password_hash: &str) -> AuthResult<()> {
    let parsed =
        PasswordHash::new(password_hash).map_err(|err| AuthError::PasswordHash(err.to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::BadCredentials)
}
