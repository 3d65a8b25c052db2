use actix_web::{HttpResponse, Responder, delete, get, put, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::users::EditUserForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::users as user_service;

#[get("/users")]
pub async fn list_users(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match user_service::list_users(repo.get_ref(), &user) {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(err) => error_response("list users", err),
    }
}

#[get("/users/current")]
pub async fn current_user(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match user_service::current_user(repo.get_ref(), &user) {
        Ok(current) => HttpResponse::Ok().json(current),
        Err(err) => error_response("load current user", err),
    }
}

#[put("/users/{user_id}")]
pub async fn update_user(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditUserForm>,
) -> impl Responder {
    let user_id = path.into_inner();

    match user_service::update_user(repo.get_ref(), &user, user_id, form.into_inner()) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => error_response("update user", err),
    }
}

#[delete("/users/{user_id}")]
pub async fn delete_user(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match user_service::delete_user(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("delete user", err),
    }
}
