use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a product category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable, unique name of the category.
    pub name: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
    /// Timestamp captured when the category payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    /// Build a new category payload with the supplied name and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when updating an existing category.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    /// Updated name for the category.
    pub name: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    /// Build a category update payload with the supplied name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}
