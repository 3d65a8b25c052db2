use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::suppliers::SupplierForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::suppliers as supplier_service;

#[get("/suppliers")]
pub async fn list_suppliers(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_service::list_suppliers(repo.get_ref(), &user) {
        Ok(suppliers) => HttpResponse::Ok().json(suppliers),
        Err(err) => error_response("list suppliers", err),
    }
}

#[get("/suppliers/{supplier_id}")]
pub async fn get_supplier(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_service::get_supplier(repo.get_ref(), &user, path.into_inner()) {
        Ok(supplier) => HttpResponse::Ok().json(supplier),
        Err(err) => error_response("load supplier", err),
    }
}

#[post("/suppliers")]
pub async fn create_supplier(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<SupplierForm>,
) -> impl Responder {
    match supplier_service::create_supplier(repo.get_ref(), &user, form.into_inner()) {
        Ok(supplier) => HttpResponse::Created().json(supplier),
        Err(err) => error_response("create supplier", err),
    }
}

#[put("/suppliers/{supplier_id}")]
pub async fn update_supplier(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<SupplierForm>,
) -> impl Responder {
    let supplier_id = path.into_inner();

    match supplier_service::update_supplier(repo.get_ref(), &user, supplier_id, form.into_inner())
    {
        Ok(supplier) => HttpResponse::Ok().json(supplier),
        Err(err) => error_response("update supplier", err),
    }
}

#[delete("/suppliers/{supplier_id}")]
pub async fn delete_supplier(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_service::delete_supplier(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("delete supplier", err),
    }
}
