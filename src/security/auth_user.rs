use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::User;
use crate::security::AuthResult;
use crate::security::password::verify_password;

/// A stored user in the shape the login flow checks credentials against.
///
/// Built fresh for every login attempt and dropped once the check is done.
#[derive(Debug, Clone)]
pub struct AuthUser {
    user: User,
}

impl AuthUser {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Principal name. Users log in with their email.
    pub fn username(&self) -> &str {
        &self.user.email
    }

    /// Stored Argon2 hash of the user's password.
    pub fn password(&self) -> &str {
        &self.user.password_hash
    }

    /// Role names granted to the user.
    pub fn authorities(&self) -> Vec<String> {
        vec![self.user.role.as_str().to_string()]
    }

    pub fn is_account_non_expired(&self) -> bool {
        true
    }

    pub fn is_account_non_locked(&self) -> bool {
        true
    }

    pub fn is_credentials_non_expired(&self) -> bool {
        true
    }

    pub fn is_enabled(&self) -> bool {
        true
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Check `password` against the stored hash.
    pub fn verify(&self, password: &str) -> AuthResult<()> {
        verify_password(password, self.password())
    }

    /// Session identity for the verified user.
    pub fn to_authenticated_user(&self) -> AuthenticatedUser {
        AuthenticatedUser::from(&self.user)
    }

    pub fn into_user(self) -> User {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::user::UserRole;

    fn sample_user() -> User {
        User {
            id: 3,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            phone_number: None,
            role: UserRole::Admin,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn exposes_email_as_username_and_stored_hash_as_password() {
        let auth_user = AuthUser::new(sample_user());

        assert_eq!(auth_user.username(), "ada@example.com");
        assert_eq!(auth_user.password(), "$argon2id$stub");
        assert_eq!(auth_user.authorities(), vec!["admin".to_string()]);
        assert!(auth_user.is_enabled());
    }

    #[test]
    fn session_identity_carries_user_id_and_role() {
        let identity = AuthUser::new(sample_user()).to_authenticated_user();

        assert_eq!(identity.id, 3);
        assert_eq!(identity.email, "ada@example.com");
        assert!(identity.is_admin());
    }
}
