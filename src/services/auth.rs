use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::{NewUser, User, UserRole};
use crate::forms::users::{LoginForm, RegisterForm};
use crate::repository::{UserReader, UserWriter};
use crate::security::password::hash_password;
use crate::security::{AuthError, CustomUserDetailsService};
use crate::services::{ServiceError, ServiceResult};

/// Create a manager account with a hashed password.
pub fn register<R>(repo: &R, form: RegisterForm) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    let registration = form
        .into_registration()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_user_by_email(&registration.email)?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "email {} is already registered",
            registration.email
        )));
    }

    let password_hash = hash_password(&registration.password)?;

    let mut new_user = NewUser::new(
        registration.name,
        registration.email,
        password_hash,
        UserRole::Manager,
    );
    if let Some(phone_number) = registration.phone_number {
        new_user = new_user.with_phone_number(phone_number);
    }

    let user = repo.create_user(&new_user)?;
    log::info!("Registered user {} as {}", user.id, user.role.as_str());

    Ok(user)
}

/// Resolve and verify a login.
///
/// An unknown email and a wrong password both come back as
/// [`ServiceError::Unauthorized`].
pub fn login<R>(repo: &R, form: LoginForm) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + ?Sized,
{
    let details = CustomUserDetailsService::new(repo);

    let auth_user = match details.load_by_identifier(&form.email) {
        Ok(auth_user) => auth_user,
        Err(AuthError::UserNotFound) => {
            log::info!("Login rejected: no user for submitted email");
            return Err(ServiceError::Unauthorized);
        }
        Err(err) => return Err(err.into()),
    };

    if let Err(err) = auth_user.verify(&form.password) {
        if matches!(err, AuthError::BadCredentials) {
            log::info!("Login rejected: bad password for user {}", auth_user.user().id);
        } else {
            log::error!("Failed to verify password for user {}: {err}", auth_user.user().id);
        }
        return Err(err.into());
    }

    Ok(auth_user.to_authenticated_user())
}

/// Rebuild the signed-in user from the store.
///
/// The session only carries the user id, so role changes and deletions
/// apply on the next request. A user that no longer exists is
/// [`ServiceError::Unauthorized`].
pub fn resolve_session<R>(repo: &R, user_id: i32) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + ?Sized,
{
    match repo.get_user_by_id(user_id)? {
        Some(user) => Ok(AuthenticatedUser::from(&user)),
        None => {
            log::info!("Session rejected: user {user_id} no longer exists");
            Err(ServiceError::Unauthorized)
        }
    }
}
