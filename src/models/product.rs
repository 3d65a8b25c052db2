use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub price_cents: i64,
    pub stock_quantity: i32,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub sku: &'a str,
    pub price_cents: i64,
    pub stock_quantity: i32,
    pub description: Option<&'a str>,
    pub category_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: Option<&'a str>,
    pub sku: Option<&'a str>,
    pub price_cents: Option<i64>,
    pub stock_quantity: Option<i32>,
    pub description: Option<Option<&'a str>>,
    pub category_id: Option<Option<i32>>,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            sku: value.sku,
            price_cents: value.price_cents,
            stock_quantity: value.stock_quantity,
            description: value.description,
            category_id: value.category_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            sku: value.sku.as_str(),
            price_cents: value.price_cents,
            stock_quantity: value.stock_quantity,
            description: value.description.as_deref(),
            category_id: value.category_id,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_deref(),
            sku: value.sku.as_deref(),
            price_cents: value.price_cents,
            stock_quantity: value.stock_quantity,
            description: value
                .description
                .as_ref()
                .map(|description| description.as_deref()),
            category_id: value.category_id,
            updated_at: value.updated_at,
        }
    }
}
