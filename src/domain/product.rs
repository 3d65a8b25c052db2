use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a stocked product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Unique stock keeping unit identifier.
    pub sku: String,
    /// Unit price represented in the smallest currency unit (for example cents).
    pub price_cents: i64,
    /// Units currently on hand. Never negative.
    pub stock_quantity: i32,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Category the product is filed under, if any.
    pub category_id: Option<i32>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub price_cents: i64,
    pub stock_quantity: i32,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    /// Timestamp captured when the product payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>, sku: impl Into<String>, price_cents: i64) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            price_cents,
            stock_quantity: 0,
            description: None,
            category_id: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Set the opening stock level.
    pub fn with_stock_quantity(mut self, stock_quantity: i32) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// File the product under a category.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Patch data applied when updating an existing product.
///
/// `None` leaves a column untouched; for nullable columns `Some(None)` clears it.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price_cents: Option<i64>,
    pub stock_quantity: Option<i32>,
    pub description: Option<Option<String>>,
    pub category_id: Option<Option<i32>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            name: None,
            sku: None,
            price_cents: None,
            stock_quantity: None,
            description: None,
            category_id: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Update the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the SKU.
    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Update the product price.
    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    /// Overwrite the stock level.
    pub fn stock_quantity(mut self, stock_quantity: i32) -> Self {
        self.stock_quantity = Some(stock_quantity);
        self
    }

    /// Update the product description, using `None` to clear an existing value.
    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(|value| value.into()));
        self
    }

    /// Move the product to another category, using `None` to uncategorize it.
    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Whether the patch would change a column besides `updated_at`.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sku.is_none()
            && self.price_cents.is_none()
            && self.stock_quantity.is_none()
            && self.description.is_none()
            && self.category_id.is_none()
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional name or SKU search term.
    pub search: Option<String>,
    /// Optional category filter.
    pub category_id: Option<i32>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name or SKU.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restrict the results to one category.
    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
