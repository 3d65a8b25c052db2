use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::products::{AddProductForm, EditProductForm, ProductsQuery};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products as product_service;

/// Paginated product listing, filtered by `search` and `category_id`.
#[get("/products")]
pub async fn list_products(
    params: web::Query<ProductsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::list_products(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response("list products", err),
    }
}

#[get("/products/{product_id}")]
pub async fn get_product(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::get_product(repo.get_ref(), &user, path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response("load product", err),
    }
}

#[post("/products")]
pub async fn create_product(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    match product_service::create_product(repo.get_ref(), &user, form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response("create product", err),
    }
}

#[put("/products/{product_id}")]
pub async fn update_product(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditProductForm>,
) -> impl Responder {
    let product_id = path.into_inner();

    match product_service::update_product(repo.get_ref(), &user, product_id, form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response("update product", err),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::delete_product(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response("delete product", err),
    }
}
