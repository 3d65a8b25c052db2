use serde::Serialize;

use crate::domain::user::{User, UserRole};

/// The logged-in user as seen by services, rebuilt from the store per request.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: UserRole) -> bool {
        self.roles.iter().any(|granted| granted == role.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(value: &User) -> Self {
        Self {
            id: value.id,
            email: value.email.clone(),
            name: value.name.clone(),
            roles: vec![value.role.as_str().to_string()],
        }
    }
}
