//! Login support: the user-lookup adapter and password hashing.

use thiserror::Error;

use crate::repository::RepositoryError;

pub mod auth_user;
pub mod password;
pub mod user_details;

pub use auth_user::AuthUser;
pub use user_details::CustomUserDetailsService;

/// Result type returned by the authentication helpers.
pub type AuthResult<T> = Result<T, AuthError>;

/// Failures raised while resolving or verifying a login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user is registered under the submitted email.
    #[error("User Email Not Found!")]
    UserNotFound,
    /// The submitted password does not match the stored hash.
    #[error("bad credentials")]
    BadCredentials,
    /// The password could not be hashed, or the stored hash is malformed.
    #[error("password hash error: {0}")]
    PasswordHash(String),
    /// The user store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
