use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::user::{UpdateUser, UserRole, normalize_email};
use crate::forms::{sanitize_inline_text, sanitize_optional_text};

const NAME_MAX_LEN: u64 = 128;
const PASSWORD_MIN_LEN: u64 = 8;
const PASSWORD_MAX_LEN: u64 = 256;
const PHONE_MAX_LEN: u64 = 32;

pub type UserFormResult<T> = Result<T, UserFormError>;

#[derive(Debug, Error)]
pub enum UserFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("user name cannot be empty")]
    EmptyName,
}

/// Self-service account creation. New accounts always start as managers;
/// a `role` sent by the client is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = PASSWORD_MIN_LEN, max = PASSWORD_MAX_LEN))]
    pub password: String,
    #[validate(length(max = PHONE_MAX_LEN))]
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Sanitized registration data; the password is still in plain text.
#[derive(Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

impl RegisterForm {
    pub fn into_registration(self) -> UserFormResult<Registration> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(UserFormError::EmptyName);
        }

        Ok(Registration {
            name,
            email: normalize_email(&self.email),
            password: self.password,
            phone_number: sanitize_optional_text(self.phone_number.as_deref()),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Partial update of a user account.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditUserForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = PASSWORD_MIN_LEN, max = PASSWORD_MAX_LEN))]
    pub password: Option<String>,
    #[validate(length(max = PHONE_MAX_LEN))]
    pub phone_number: Option<String>,
    pub role: Option<UserRole>,
}

/// Sanitized edit; `password` is still in plain text and must be hashed
/// before it reaches the store.
#[derive(Debug)]
pub struct UserEdit {
    pub updates: UpdateUser,
    pub password: Option<String>,
}

impl EditUserForm {
    pub fn into_user_edit(self) -> UserFormResult<UserEdit> {
        self.validate()?;

        let mut updates = UpdateUser::default();

        if let Some(name) = self.name.as_deref() {
            let name = sanitize_inline_text(name);
            if name.is_empty() {
                return Err(UserFormError::EmptyName);
            }
            updates.name = Some(name);
        }

        updates.email = self.email.as_deref().map(normalize_email);
        updates.phone_number = self
            .phone_number
            .as_deref()
            .map(|phone| sanitize_optional_text(Some(phone)));
        updates.role = self.role;

        Ok(UserEdit {
            updates,
            password: self.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form(email: &str, password: &str) -> RegisterForm {
        RegisterForm {
            name: "  Ada   Lovelace ".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone_number: None,
        }
    }

    #[test]
    fn registration_normalizes_email() {
        let registration = register_form("Ada@Example.com", "s3cret-pass")
            .into_registration()
            .expect("expected success");

        assert_eq!(registration.name, "Ada Lovelace");
        assert_eq!(registration.email, "ada@example.com");
    }

    #[test]
    fn registration_rejects_short_password() {
        let result = register_form("ada@example.com", "short").into_registration();

        assert!(matches!(result, Err(UserFormError::Validation(_))));
    }

    #[test]
    fn registration_rejects_invalid_email() {
        let result = register_form("not-an-email", "long-enough").into_registration();

        assert!(matches!(result, Err(UserFormError::Validation(_))));
    }

    #[test]
    fn edit_form_clears_blank_phone_number() {
        let form = EditUserForm {
            phone_number: Some("  ".to_string()),
            ..EditUserForm::default()
        };

        let edit = form.into_user_edit().expect("expected success");

        assert!(matches!(edit.updates.phone_number, Some(None)));
        assert!(edit.password.is_none());
    }
}
