use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Access level granted to a user.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access, including catalogue and user management.
    Admin,
    /// Day-to-day stock operations and read access.
    #[default]
    Manager,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
        }
    }
}

impl From<&str> for UserRole {
    fn from(value: &str) -> Self {
        match value {
            "admin" => UserRole::Admin,
            _ => UserRole::Manager,
        }
    }
}

impl From<UserRole> for &'static str {
    fn from(value: UserRole) -> Self {
        value.as_str()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub role: UserRole,
    pub updated_at: NaiveDateTime,
}

impl NewUser {
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String, role: UserRole) -> Self {
        Self {
            name,
            email: normalize_email(&email),
            password_hash,
            phone_number: None,
            role,
            updated_at: Local::now().naive_utc(),
        }
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Patch applied to a user. `None` leaves the column untouched.
#[derive(Clone, Debug)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub role: Option<UserRole>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateUser {
    fn default() -> Self {
        Self {
            name: None,
            email: None,
            password_hash: None,
            phone_number: None,
            role: None,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Emails are compared case-insensitively, so they are stored lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
