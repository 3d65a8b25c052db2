use thiserror::Error;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::UserRole;
use crate::forms::{FieldError, describe_field_errors};
use crate::repository::RepositoryError;
use crate::security::AuthError;

pub mod auth;
pub mod categories;
pub mod products;
pub mod suppliers;
pub mod transactions;
pub mod users;

/// Result alias returned by every service function.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcome categories the HTTP layer translates into status codes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or rejected credentials.
    #[error("unauthorized")]
    Unauthorized,
    /// Authenticated, but the role does not allow the operation.
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    /// Input rejected after sanitization.
    #[error("{0}")]
    Form(String),
    /// Field-level constraint violations.
    #[error("validation failed: {}", describe_field_errors(.0))]
    Validation(Vec<FieldError>),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict(message) => ServiceError::Conflict(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for ServiceError {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::UserNotFound | AuthError::BadCredentials => ServiceError::Unauthorized,
            AuthError::Repository(err) => ServiceError::from(err),
            AuthError::PasswordHash(message) => ServiceError::Internal(message),
        }
    }
}

/// Allow any role that can work with stock: admins and managers.
pub(crate) fn ensure_staff(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.has_role(UserRole::Admin) || user.has_role(UserRole::Manager) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden)
    }
}

pub(crate) fn ensure_admin(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(ServiceError::Forbidden)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::auth::AuthenticatedUser;

    pub fn fixed_datetime() -> NaiveDateTime {
        match NaiveDate::from_ymd_opt(2024, 1, 1) {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            None => NaiveDateTime::default(),
        }
    }

    pub fn user_with_roles(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            email: "user@example.com".to_string(),
            name: "Tester".to_string(),
            roles: roles.iter().map(|role| (*role).to_string()).collect(),
        }
    }

    pub fn admin() -> AuthenticatedUser {
        user_with_roles(&["admin"])
    }

    pub fn manager() -> AuthenticatedUser {
        user_with_roles(&["manager"])
    }
}
