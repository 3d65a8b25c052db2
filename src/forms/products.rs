use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{sanitize_inline_text, sanitize_optional_text};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum allowed length for a SKU.
const SKU_MAX_LEN: u64 = 64;

/// Maximum allowed length for a product description.
const DESCRIPTION_MAX_LEN: u64 = 2048;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The provided SKU is empty after sanitization.
    #[error("product sku cannot be empty")]
    EmptySku,
}

/// Payload accepted when creating a product.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = 1, max = SKU_MAX_LEN))]
    pub sku: String,
    /// Unit price in the smallest currency unit.
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock_quantity: i32,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub category_id: Option<i32>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let sku = sanitize_sku(&self.sku);
        if sku.is_empty() {
            return Err(ProductFormError::EmptySku);
        }

        let mut new_product =
            NewProduct::new(name, sku, self.price_cents).with_stock_quantity(self.stock_quantity);

        if let Some(description) = sanitize_optional_text(self.description.as_deref()) {
            new_product = new_product.with_description(description);
        }

        if let Some(category_id) = self.category_id {
            new_product = new_product.with_category_id(category_id);
        }

        Ok(new_product)
    }
}

/// Partial update of a product. Absent fields are left untouched.
///
/// `description` and `category_id` accept an explicit `null` to clear the
/// stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = SKU_MAX_LEN))]
    pub sku: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,
    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub category_id: Option<Option<i32>>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let mut updates = UpdateProduct::new();

        if let Some(name) = self.name.as_deref() {
            let name = sanitize_inline_text(name);
            if name.is_empty() {
                return Err(ProductFormError::EmptyName);
            }
            updates = updates.name(name);
        }

        if let Some(sku) = self.sku.as_deref() {
            let sku = sanitize_sku(sku);
            if sku.is_empty() {
                return Err(ProductFormError::EmptySku);
            }
            updates = updates.sku(sku);
        }

        if let Some(price_cents) = self.price_cents {
            updates = updates.price_cents(price_cents);
        }

        if let Some(stock_quantity) = self.stock_quantity {
            updates = updates.stock_quantity(stock_quantity);
        }

        if let Some(description) = self.description {
            updates = updates.description(sanitize_optional_text(description.as_deref()));
        }

        if let Some(category_id) = self.category_id {
            updates = updates.category_id(category_id.filter(|id| *id > 0));
        }

        Ok(updates)
    }
}

/// Query parameters accepted by the product list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub search: Option<String>,
    pub category_id: Option<i32>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Distinguish an explicit `null` (`Some(None)`) from an absent field (`None`).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn sanitize_sku(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|ch| !ch.is_control() && !ch.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_product_form_converts_successfully() {
        let form = AddProductForm {
            name: "  Deluxe  Product  ".to_string(),
            sku: " sku-001 ".to_string(),
            price_cents: 1250,
            stock_quantity: 4,
            description: Some(" First line.\n\n Second line.  ".to_string()),
            category_id: Some(3),
        };

        let new_product = form.into_new_product().expect("expected success");

        assert_eq!(new_product.name, "Deluxe Product");
        assert_eq!(new_product.sku, "SKU-001");
        assert_eq!(new_product.price_cents, 1250);
        assert_eq!(new_product.stock_quantity, 4);
        assert_eq!(
            new_product.description.as_deref(),
            Some("First line.\n\nSecond line.")
        );
        assert_eq!(new_product.category_id, Some(3));
    }

    #[test]
    fn add_product_form_rejects_empty_name() {
        let form = AddProductForm {
            name: "   ".to_string(),
            sku: "A-1".to_string(),
            price_cents: 100,
            stock_quantity: 0,
            description: None,
            category_id: None,
        };

        let result = form.into_new_product();

        assert!(matches!(result, Err(ProductFormError::EmptyName)));
    }

    #[test]
    fn add_product_form_rejects_negative_price() {
        let form = AddProductForm {
            name: "Widget".to_string(),
            sku: "W-1".to_string(),
            price_cents: -5,
            stock_quantity: 0,
            description: None,
            category_id: None,
        };

        let result = form.into_new_product();

        assert!(matches!(result, Err(ProductFormError::Validation(_))));
    }

    #[test]
    fn edit_product_form_distinguishes_null_from_absent() {
        let form: EditProductForm =
            serde_json::from_str(r#"{"description": null, "price_cents": 900}"#)
                .expect("payload should deserialize");

        let updates = form.into_update_product().expect("expected success");

        assert!(matches!(updates.description, Some(None)));
        assert!(updates.category_id.is_none());
        assert_eq!(updates.price_cents, Some(900));
        assert!(updates.name.is_none());
    }

    #[test]
    fn edit_product_form_rejects_blank_sku() {
        let form = EditProductForm {
            sku: Some(" \t ".to_string()),
            ..EditProductForm::default()
        };

        let result = form.into_update_product();

        assert!(matches!(result, Err(ProductFormError::EmptySku)));
    }
}
