use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, post, web};

use crate::forms::users::{LoginForm, RegisterForm};
use crate::repository::DieselRepository;
use crate::routes::{ErrorBody, error_response};
use crate::services::auth as auth_service;

#[post("/register")]
pub async fn register(
    repo: web::Data<DieselRepository>,
    form: web::Json<RegisterForm>,
) -> impl Responder {
    match auth_service::register(repo.get_ref(), form.into_inner()) {
        Ok(user) => HttpResponse::Created().json(user),
        Err(err) => error_response("register user", err),
    }
}

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    form: web::Json<LoginForm>,
) -> impl Responder {
    let user = match auth_service::login(repo.get_ref(), form.into_inner()) {
        Ok(user) => user,
        Err(err) => return error_response("log in", err),
    };

    if let Err(err) = Identity::login(&req.extensions(), user.id.to_string()) {
        log::error!("Failed to attach identity: {err}");
        return HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"));
    }

    HttpResponse::Ok().json(user)
}

#[post("/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    HttpResponse::NoContent().finish()
}
