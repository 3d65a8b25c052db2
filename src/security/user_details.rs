use crate::domain::user::normalize_email;
use crate::repository::UserReader;
use crate::security::{AuthError, AuthResult, AuthUser};

/// Resolves a login identifier (the user's email) to an [`AuthUser`].
///
/// Performs exactly one read against the user store per call and never
/// writes. A missing user is reported as [`AuthError::UserNotFound`], kept
/// distinct from a bad password; collapsing the two for the client is left
/// to the login service.
pub struct CustomUserDetailsService<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R> CustomUserDetailsService<'a, R>
where
    R: UserReader + ?Sized,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn load_by_identifier(&self, identifier: &str) -> AuthResult<AuthUser> {
        let email = normalize_email(identifier);

        match self.repo.get_user_by_email(&email)? {
            Some(user) => Ok(AuthUser::new(user)),
            None => Err(AuthError::UserNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::user::{User, UserRole};
    use crate::repository::RepositoryError;
    use crate::repository::mock::MockUserReader;

    fn stored_user(email: &str) -> User {
        User {
            id: 7,
            name: "Grace".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$stub".to_string(),
            phone_number: Some("+1 555 0100".to_string()),
            role: UserRole::Manager,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn found_user_is_wrapped_with_matching_identity() {
        let mut repo = MockUserReader::new();
        repo.expect_get_user_by_email()
            .times(1)
            .withf(|email| email == "grace@example.com")
            .returning(|email| Ok(Some(stored_user(email))));

        let service = CustomUserDetailsService::new(&repo);
        let auth_user = service
            .load_by_identifier("grace@example.com")
            .expect("expected user to load");

        assert_eq!(auth_user.username(), "grace@example.com");
        assert_eq!(auth_user.user().id, 7);
        assert_eq!(auth_user.password(), "$argon2id$v=19$stub");
    }

    #[test]
    fn identifier_is_normalized_before_lookup() {
        let mut repo = MockUserReader::new();
        repo.expect_get_user_by_email()
            .times(1)
            .withf(|email| email == "grace@example.com")
            .returning(|email| Ok(Some(stored_user(email))));

        let service = CustomUserDetailsService::new(&repo);

        assert!(service.load_by_identifier("  Grace@Example.COM ").is_ok());
    }

    #[test]
    fn missing_user_is_not_found() {
        let mut repo = MockUserReader::new();
        repo.expect_get_user_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = CustomUserDetailsService::new(&repo);
        let result = service.load_by_identifier("nobody@example.com");

        match result {
            Err(err @ AuthError::UserNotFound) => {
                assert_eq!(err.to_string(), "User Email Not Found!")
            }
            other => panic!("expected UserNotFound, got {other:?}"),
        }
    }

    #[test]
    fn storage_failures_propagate() {
        let mut repo = MockUserReader::new();
        repo.expect_get_user_by_email()
            .times(1)
            .returning(|_| Err(RepositoryError::Connection("pool exhausted".to_string())));

        let service = CustomUserDetailsService::new(&repo);
        let result = service.load_by_identifier("grace@example.com");

        assert!(matches!(
            result,
            Err(AuthError::Repository(RepositoryError::Connection(_)))
        ));
    }
}
