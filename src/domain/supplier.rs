use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A company goods are purchased from and returned to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    /// Free-form contact details such as a phone number or email.
    pub contact_info: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new supplier.
#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub name: String,
    pub contact_info: Option<String>,
    pub address: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewSupplier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_info: None,
            address: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_contact_info(mut self, contact_info: impl Into<String>) -> Self {
        self.contact_info = Some(contact_info.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Full replacement of a supplier's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateSupplier {
    pub name: String,
    pub contact_info: Option<String>,
    pub address: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpdateSupplier {
    pub fn new(name: impl Into<String>, contact_info: Option<String>, address: Option<String>) -> Self {
        Self {
            name: name.into(),
            contact_info,
            address,
            updated_at: Local::now().naive_utc(),
        }
    }
}
