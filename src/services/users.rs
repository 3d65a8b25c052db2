use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::User;
use crate::forms::users::EditUserForm;
use crate::repository::{UserReader, UserWriter};
use crate::security::password::hash_password;
use crate::services::{ServiceError, ServiceResult, ensure_admin, ensure_staff};

pub fn list_users<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<User>>
where
    R: UserReader + ?Sized,
{
    ensure_admin(user)?;

    repo.list_users().map_err(ServiceError::from)
}

/// Returns the stored profile of the signed-in user.
pub fn current_user<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    ensure_staff(user)?;

    repo.get_user_by_id(user.id)?.ok_or(ServiceError::NotFound)
}

/// Updates a user profile.
///
/// Users may edit their own profile. Editing anyone else, or changing a role,
/// requires the admin role.
pub fn update_user<R>(
    repo: &R,
    user: &AuthenticatedUser,
    user_id: i32,
    form: EditUserForm,
) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    if user.id != user_id || form.role.is_some() {
        ensure_admin(user)?;
    } else {
        ensure_staff(user)?;
    }

    let edit = form
        .into_user_edit()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let mut updates = edit.updates;
    if let Some(password) = edit.password {
        updates.password_hash = Some(hash_password(&password)?);
    }

    let updated = repo.update_user(user_id, &updates)?;
    log::info!("user {user_id} updated by user {}", user.id);

    Ok(updated)
}

/// Deletes a user account. Admins cannot delete themselves.
pub fn delete_user<R>(repo: &R, user: &AuthenticatedUser, user_id: i32) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    ensure_admin(user)?;

    if user.id == user_id {
        return Err(ServiceError::Form(
            "you cannot delete your own account".to_string(),
        ));
    }

    repo.delete_user(user_id)?;
    log::info!("user {user_id} deleted by user {}", user.id);

    Ok(())
}
