use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::supplier::{NewSupplier, UpdateSupplier};
use crate::forms::{sanitize_inline_text, sanitize_optional_text};

const NAME_MAX_LEN: u64 = 128;
const CONTACT_INFO_MAX_LEN: u64 = 256;
const ADDRESS_MAX_LEN: u64 = 512;

pub type SupplierFormResult<T> = Result<T, SupplierFormError>;

#[derive(Debug, Error)]
pub enum SupplierFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("supplier name cannot be empty")]
    EmptyName,
}

/// Payload accepted when creating or replacing a supplier.
#[derive(Debug, Deserialize, Validate)]
pub struct SupplierForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = CONTACT_INFO_MAX_LEN))]
    #[serde(default)]
    pub contact_info: Option<String>,
    #[validate(length(max = ADDRESS_MAX_LEN))]
    #[serde(default)]
    pub address: Option<String>,
}

struct SanitizedSupplier {
    name: String,
    contact_info: Option<String>,
    address: Option<String>,
}

impl SupplierForm {
    pub fn into_new_supplier(self) -> SupplierFormResult<NewSupplier> {
        let sanitized = self.sanitize()?;

        let mut new_supplier = NewSupplier::new(sanitized.name);
        if let Some(contact_info) = sanitized.contact_info {
            new_supplier = new_supplier.with_contact_info(contact_info);
        }
        if let Some(address) = sanitized.address {
            new_supplier = new_supplier.with_address(address);
        }

        Ok(new_supplier)
    }

    /// Blank optional fields clear the stored value.
    pub fn into_update_supplier(self) -> SupplierFormResult<UpdateSupplier> {
        let sanitized = self.sanitize()?;

        Ok(UpdateSupplier::new(
            sanitized.name,
            sanitized.contact_info,
            sanitized.address,
        ))
    }

    fn sanitize(self) -> SupplierFormResult<SanitizedSupplier> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(SupplierFormError::EmptyName);
        }

        Ok(SanitizedSupplier {
            name,
            contact_info: sanitize_optional_text(self.contact_info.as_deref()),
            address: sanitize_optional_text(self.address.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_form_builds_new_supplier() {
        let form = SupplierForm {
            name: " Acme   Wholesale ".to_string(),
            contact_info: Some(" orders@acme.test ".to_string()),
            address: Some("   ".to_string()),
        };

        let supplier = form.into_new_supplier().expect("expected success");

        assert_eq!(supplier.name, "Acme Wholesale");
        assert_eq!(supplier.contact_info.as_deref(), Some("orders@acme.test"));
        assert!(supplier.address.is_none());
    }

    #[test]
    fn supplier_form_rejects_blank_name() {
        let form = SupplierForm {
            name: "  ".to_string(),
            contact_info: None,
            address: None,
        };

        assert!(matches!(
            form.into_update_supplier(),
            Err(SupplierFormError::EmptyName)
        ));
    }
}
