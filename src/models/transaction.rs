use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::transaction::{
    NewTransaction as DomainNewTransaction, Transaction as DomainTransaction,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::transactions)]
pub struct Transaction {
    pub id: i32,
    pub total_products: i32,
    pub total_price_cents: i64,
    pub transaction_type: String,
    pub status: String,
    pub description: Option<String>,
    pub note: Option<String>,
    pub user_id: i32,
    pub product_id: i32,
    pub supplier_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransaction<'a> {
    pub total_products: i32,
    pub total_price_cents: i64,
    pub transaction_type: &'a str,
    pub status: &'a str,
    pub description: Option<&'a str>,
    pub note: Option<&'a str>,
    pub user_id: i32,
    pub product_id: i32,
    pub supplier_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl From<Transaction> for DomainTransaction {
    fn from(value: Transaction) -> Self {
        Self {
            id: value.id,
            total_products: value.total_products,
            total_price_cents: value.total_price_cents,
            transaction_type: value.transaction_type.as_str().into(),
            status: value.status.as_str().into(),
            description: value.description,
            note: value.note,
            user_id: value.user_id,
            product_id: value.product_id,
            supplier_id: value.supplier_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewTransaction> for NewTransaction<'a> {
    fn from(value: &'a DomainNewTransaction) -> Self {
        Self {
            total_products: value.total_products,
            total_price_cents: value.total_price_cents,
            transaction_type: value.transaction_type.into(),
            status: value.status.into(),
            description: value.description.as_deref(),
            note: value.note.as_deref(),
            user_id: value.user_id,
            product_id: value.product_id,
            supplier_id: value.supplier_id,
            updated_at: value.updated_at,
        }
    }
}
