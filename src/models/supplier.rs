use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::supplier::{
    NewSupplier as DomainNewSupplier, Supplier as DomainSupplier,
    UpdateSupplier as DomainUpdateSupplier,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::suppliers)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact_info: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::suppliers)]
pub struct NewSupplier<'a> {
    pub name: &'a str,
    pub contact_info: Option<&'a str>,
    pub address: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::suppliers)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateSupplier<'a> {
    pub name: &'a str,
    pub contact_info: Option<&'a str>,
    pub address: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Supplier> for DomainSupplier {
    fn from(value: Supplier) -> Self {
        Self {
            id: value.id,
            name: value.name,
            contact_info: value.contact_info,
            address: value.address,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewSupplier> for NewSupplier<'a> {
    fn from(value: &'a DomainNewSupplier) -> Self {
        Self {
            name: value.name.as_str(),
            contact_info: value.contact_info.as_deref(),
            address: value.address.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateSupplier> for UpdateSupplier<'a> {
    fn from(value: &'a DomainUpdateSupplier) -> Self {
        Self {
            name: value.name.as_str(),
            contact_info: value.contact_info.as_deref(),
            address: value.address.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
