use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::transaction::TransactionStatus;
use crate::forms::{FieldError, field_errors};

pub const PRODUCT_ID_MESSAGE: &str = "ProductDTO id is requered";
pub const QUANTITY_MESSAGE: &str = "Quantity id is requered";

/// Inbound payload for recording a purchase, sale or return.
///
/// Unknown JSON fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[validate(range(min = 1, message = "ProductDTO id is requered"))]
    pub product_id: Option<i32>,
    #[validate(range(min = 1, message = "Quantity id is requered"))]
    pub quantity: Option<i32>,
    pub supplier_id: Option<i32>,
    /// Numeric on the wire for compatibility with existing clients.
    pub description: Option<i64>,
}

/// A [`TransactionRequest`] whose required fields are known to be present
/// and positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidTransaction {
    pub product_id: i32,
    pub quantity: i32,
    pub supplier_id: Option<i32>,
    pub description: Option<i64>,
}

impl TransactionRequest {
    /// Check the field constraints, returning every violation found.
    ///
    /// Range checks cover the fields that are present; absent required
    /// fields are reported alongside them with the same messages.
    pub fn validate_request(&self) -> Result<ValidTransaction, Vec<FieldError>> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => field_errors(&errors),
        };

        if self.product_id.is_none() {
            errors.push(FieldError::new("productId", PRODUCT_ID_MESSAGE));
        }
        if self.quantity.is_none() {
            errors.push(FieldError::new("quantity", QUANTITY_MESSAGE));
        }

        match (self.product_id, self.quantity) {
            (Some(product_id), Some(quantity)) if errors.is_empty() => Ok(ValidTransaction {
                product_id,
                quantity,
                supplier_id: self.supplier_id,
                description: self.description,
            }),
            _ => {
                errors.sort_by(|a, b| a.field.cmp(&b.field));
                Err(errors)
            }
        }
    }
}

/// Payload for moving a transaction to another lifecycle state.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTransactionStatusForm {
    pub status: TransactionStatus,
}

/// Query parameters of the paginated transaction list.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionsQuery {
    pub search: Option<String>,
    pub product_id: Option<i32>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Query parameters of the per-month transaction list.
#[derive(Debug, Deserialize)]
pub struct TransactionsByMonthQuery {
    pub month: u32,
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> TransactionRequest {
        serde_json::from_str(json).expect("payload should deserialize")
    }

    #[test]
    fn positive_product_and_quantity_pass() {
        let valid = parse(r#"{"productId": 5, "quantity": 3}"#)
            .validate_request()
            .expect("expected validation to pass");

        assert_eq!(valid.product_id, 5);
        assert_eq!(valid.quantity, 3);
        assert_eq!(valid.supplier_id, None);
        assert_eq!(valid.description, None);
    }

    #[test]
    fn zero_product_id_is_rejected_with_configured_message() {
        let errors = parse(r#"{"productId": 0, "quantity": 3}"#)
            .validate_request()
            .expect_err("expected validation to fail");

        assert_eq!(
            errors,
            vec![FieldError::new("productId", "ProductDTO id is requered")]
        );
    }

    #[test]
    fn missing_product_id_is_rejected() {
        let errors = parse(r#"{"quantity": 3}"#)
            .validate_request()
            .expect_err("expected validation to fail");

        assert_eq!(
            errors,
            vec![FieldError::new("productId", PRODUCT_ID_MESSAGE)]
        );
    }

    #[test]
    fn negative_or_missing_quantity_is_rejected() {
        for payload in [
            r#"{"productId": 1, "quantity": -4}"#,
            r#"{"productId": 1, "quantity": 0}"#,
            r#"{"productId": 1}"#,
        ] {
            let errors = parse(payload)
                .validate_request()
                .expect_err("expected validation to fail");

            assert_eq!(errors, vec![FieldError::new("quantity", QUANTITY_MESSAGE)]);
        }
    }

    #[test]
    fn both_violations_are_reported_together() {
        let errors = parse(r#"{"productId": -1}"#)
            .validate_request()
            .expect_err("expected validation to fail");

        assert_eq!(
            errors,
            vec![
                FieldError::new("productId", PRODUCT_ID_MESSAGE),
                FieldError::new("quantity", QUANTITY_MESSAGE),
            ]
        );
    }

    #[test]
    fn missing_product_and_negative_quantity_are_reported_together() {
        let errors = parse(r#"{"quantity": -2}"#)
            .validate_request()
            .expect_err("expected validation to fail");

        assert_eq!(
            errors,
            vec![
                FieldError::new("productId", PRODUCT_ID_MESSAGE),
                FieldError::new("quantity", QUANTITY_MESSAGE),
            ]
        );
    }

    #[test]
    fn optional_fields_and_unknown_fields_are_accepted() {
        let valid = parse(
            r#"{"productId": 2, "quantity": 1, "supplierId": 9, "description": 42, "colour": "red"}"#,
        )
        .validate_request()
        .expect("expected validation to pass");

        assert_eq!(valid.supplier_id, Some(9));
        assert_eq!(valid.description, Some(42));
    }

    #[test]
    fn textual_description_does_not_deserialize() {
        let result = serde_json::from_str::<TransactionRequest>(
            r#"{"productId": 2, "quantity": 1, "description": "restock"}"#,
        );

        assert!(result.is_err());
    }
}
