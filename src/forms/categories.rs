use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::sanitize_inline_text;

/// Maximum length allowed for a category name.
const NAME_MAX_LEN: u64 = 128;

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category forms.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
}

/// Payload accepted when creating or renaming a category.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
}

impl CategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        Ok(NewCategory::new(self.sanitized_name()?))
    }

    /// Validates and sanitizes the payload into a domain `UpdateCategory`.
    pub fn into_update_category(self) -> CategoryFormResult<UpdateCategory> {
        Ok(UpdateCategory::new(self.sanitized_name()?))
    }

    fn sanitized_name(&self) -> CategoryFormResult<String> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_form_sanitizes_name() {
        let form = CategoryForm {
            name: "  Fresh   Produce ".to_string(),
        };

        let new_category = form.into_new_category().expect("expected success");

        assert_eq!(new_category.name, "Fresh Produce");
    }

    #[test]
    fn category_form_rejects_blank_name() {
        let form = CategoryForm {
            name: "   ".to_string(),
        };

        let result = form.into_update_category();

        assert!(matches!(result, Err(CategoryFormError::EmptyName)));
    }

    #[test]
    fn category_form_rejects_overlong_name() {
        let form = CategoryForm {
            name: "x".repeat(200),
        };

        let result = form.into_new_category();

        assert!(matches!(result, Err(CategoryFormError::Validation(_))));
    }
}
