use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::categories::CategoryForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::categories as category_service;

#[get("/categories")]
pub async fn list_categories(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::list_categories(repo.get_ref(), &user) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response("list categories", err),
    }
}

#[get("/categories/{category_id}")]
pub async fn get_category(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::get_category(repo.get_ref(), &user, path.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response("load category", err),
    }
}

#[post("/categories")]
pub async fn create_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<CategoryForm>,
) -> impl Responder {
    match category_service::create_category(repo.get_ref(), &user, form.into_inner()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => error_response("create category", err),
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<CategoryForm>,
) -> impl Responder {
    let category_id = path.into_inner();

    match category_service::update_category(repo.get_ref(), &user, category_id, form.into_inner())
    {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response("update category", err),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match category_service::delete_category(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("delete category", err),
    }
}
