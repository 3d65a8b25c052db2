use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::error::{
    ErrorInternalServerError, ErrorUnauthorized, InternalError, JsonPayloadError,
    QueryPayloadError,
};
use actix_web::{FromRequest, HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::FieldError;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::auth as auth_service;

pub mod auth;
pub mod categories;
pub mod products;
pub mod suppliers;
pub mod transactions;
pub mod users;

/// JSON body sent with every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

/// Translate a service failure into an HTTP response.
///
/// Only unexpected failures are logged; `action` describes what was attempted.
pub fn error_response(action: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Bad credentials"))
        }
        ServiceError::Forbidden => {
            HttpResponse::Forbidden().json(ErrorBody::new("Insufficient permissions"))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody::new("Not found")),
        ServiceError::Conflict(message) => HttpResponse::Conflict().json(ErrorBody::new(message)),
        ServiceError::Form(message) => HttpResponse::BadRequest().json(ErrorBody::new(message)),
        ServiceError::Validation(errors) => HttpResponse::BadRequest().json(ErrorBody {
            message: "Validation failed".to_string(),
            errors,
        }),
        ServiceError::Internal(message) => {
            log::error!("Failed to {action}: {message}");
            HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
        }
    }
}

/// Malformed JSON bodies are answered with 400 and the parser's message.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

/// The session identity holds only the user id; the user and its role are
/// reloaded on every request.
impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, actix_web::Error> {
    let user_id = req
        .get_identity()
        .ok()
        .and_then(|identity| identity.id().ok())
        .and_then(|id| match id.parse::<i32>() {
            Ok(user_id) => Some(user_id),
            Err(err) => {
                log::warn!("Discarding unreadable session identity: {err}");
                None
            }
        })
        .ok_or_else(|| ErrorUnauthorized("Authentication required"))?;

    let Some(repo) = req.app_data::<web::Data<DieselRepository>>() else {
        log::error!("Repository is not registered as application data");
        return Err(ErrorInternalServerError("Internal server error"));
    };

    match auth_service::resolve_session(repo.get_ref(), user_id) {
        Ok(user) => Ok(user),
        Err(ServiceError::Unauthorized) => Err(ErrorUnauthorized("Authentication required")),
        Err(err) => {
            log::error!("Failed to resolve session for user {user_id}: {err}");
            Err(ErrorInternalServerError("Internal server error"))
        }
    }
}
