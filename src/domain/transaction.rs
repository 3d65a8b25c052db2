use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Direction of a stock movement.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Stock bought from a supplier.
    Purchase,
    /// Stock sold to a customer.
    Sale,
    /// Stock sent back to the supplier it came from.
    ReturnToSupplier,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Purchase => "purchase",
            TransactionType::Sale => "sale",
            TransactionType::ReturnToSupplier => "return_to_supplier",
        }
    }
}

impl From<&str> for TransactionType {
    fn from(value: &str) -> Self {
        match value {
            "sale" => TransactionType::Sale,
            "return_to_supplier" => TransactionType::ReturnToSupplier,
            _ => TransactionType::Purchase,
        }
    }
}

impl From<TransactionType> for &'static str {
    fn from(value: TransactionType) -> Self {
        value.as_str()
    }
}

/// Lifecycle state of a transaction.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Processing => "processing",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Cancelled => "cancelled",
        }
    }
}

impl From<&str> for TransactionStatus {
    fn from(value: &str) -> Self {
        match value {
            "processing" => TransactionStatus::Processing,
            "completed" => TransactionStatus::Completed,
            "cancelled" => TransactionStatus::Cancelled,
            _ => TransactionStatus::Pending,
        }
    }
}

impl From<TransactionStatus> for &'static str {
    fn from(value: TransactionStatus) -> Self {
        value.as_str()
    }
}

/// Recorded stock movement for a single product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    /// Number of units moved.
    pub total_products: i32,
    /// Value of the movement in the smallest currency unit.
    pub total_price_cents: i64,
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    pub description: Option<String>,
    pub note: Option<String>,
    /// User who recorded the transaction.
    pub user_id: i32,
    pub product_id: i32,
    pub supplier_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to record a new transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub total_products: i32,
    pub total_price_cents: i64,
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    pub description: Option<String>,
    pub note: Option<String>,
    pub user_id: i32,
    pub product_id: i32,
    pub supplier_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl NewTransaction {
    pub fn new(
        transaction_type: TransactionType,
        user_id: i32,
        product_id: i32,
        total_products: i32,
        total_price_cents: i64,
    ) -> Self {
        Self {
            total_products,
            total_price_cents,
            transaction_type,
            status: TransactionStatus::default(),
            description: None,
            note: None,
            user_id,
            product_id,
            supplier_id: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_supplier_id(mut self, supplier_id: i32) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Change in the product's stock level this transaction implies.
    pub fn stock_delta(&self) -> i32 {
        match self.transaction_type {
            TransactionType::Purchase => self.total_products,
            TransactionType::Sale | TransactionType::ReturnToSupplier => -self.total_products,
        }
    }
}

/// Query definition used to list transactions, newest first.
#[derive(Debug, Clone, Default)]
pub struct TransactionListQuery {
    /// Matches description, note, status or type.
    pub search: Option<String>,
    pub product_id: Option<i32>,
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<NaiveDateTime>,
    /// Exclusive upper bound on `created_at`.
    pub created_before: Option<NaiveDateTime>,
    pub pagination: Option<Pagination>,
}

impl TransactionListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn product_id(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }

    /// Restrict results to `from <= created_at < before`.
    pub fn created_between(mut self, from: NaiveDateTime, before: NaiveDateTime) -> Self {
        self.created_from = Some(from);
        self.created_before = Some(before);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_delta_follows_transaction_direction() {
        let purchase = NewTransaction::new(TransactionType::Purchase, 1, 2, 5, 500);
        let sale = NewTransaction::new(TransactionType::Sale, 1, 2, 5, 500);
        let back = NewTransaction::new(TransactionType::ReturnToSupplier, 1, 2, 3, 300);

        assert_eq!(purchase.stock_delta(), 5);
        assert_eq!(sale.stock_delta(), -5);
        assert_eq!(back.stock_delta(), -3);
    }

    #[test]
    fn unknown_stored_status_reads_as_pending() {
        assert_eq!(TransactionStatus::from("archived"), TransactionStatus::Pending);
        assert_eq!(TransactionStatus::from("completed"), TransactionStatus::Completed);
    }
}
