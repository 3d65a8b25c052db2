use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::{
    NewUser as DomainNewUser, UpdateUser as DomainUpdateUser, User as DomainUser,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub phone_number: Option<&'a str>,
    pub role: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUser<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password_hash: Option<&'a str>,
    pub phone_number: Option<Option<&'a str>>,
    pub role: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<User> for DomainUser {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            password_hash: value.password_hash,
            phone_number: value.phone_number,
            role: value.role.as_str().into(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(value: &'a DomainNewUser) -> Self {
        Self {
            name: value.name.as_str(),
            email: value.email.as_str(),
            password_hash: value.password_hash.as_str(),
            phone_number: value.phone_number.as_deref(),
            role: value.role.into(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateUser> for UpdateUser<'a> {
    fn from(value: &'a DomainUpdateUser) -> Self {
        Self {
            name: value.name.as_deref(),
            email: value.email.as_deref(),
            password_hash: value.password_hash.as_deref(),
            phone_number: value.phone_number.as_ref().map(|phone| phone.as_deref()),
            role: value.role.map(|role| role.into()),
            updated_at: value.updated_at,
        }
    }
}
