use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::json;

use inventory_management::domain::user::{UpdateUser, UserRole};
use inventory_management::forms::users::RegisterForm;
use inventory_management::repository::{DieselRepository, UserWriter};
use inventory_management::routes::auth::login;
use inventory_management::routes::users::{current_user, list_users};
use inventory_management::services::auth;

mod common;

fn register_keeper(repo: &DieselRepository) -> i32 {
    auth::register(
        repo,
        RegisterForm {
            name: "Stock Keeper".to_string(),
            email: "keeper@example.com".to_string(),
            password: "correct horse".to_string(),
            phone_number: None,
        },
    )
    .expect("register")
    .id
}

fn set_role(repo: &DieselRepository, user_id: i32, role: UserRole) {
    let updates = UpdateUser {
        role: Some(role),
        ..UpdateUser::default()
    };
    repo.update_user(user_id, &updates).expect("update role");
}

#[actix_web::test]
async fn session_follows_stored_role_and_account() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let user_id = register_keeper(&repo);
    set_role(&repo, user_id, UserRole::Admin);

    let app = test::init_service(
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(web::Data::new(repo.clone()))
            .service(web::scope("/auth").service(login))
            .service(web::scope("/api").service(list_users).service(current_user)),
    )
    .await;

    let anonymous =
        test::call_service(&app, test::TestRequest::get().uri("/api/users").to_request()).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({"email": "keeper@example.com", "password": "correct horse"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let session: Cookie<'static> = response
        .response()
        .cookies()
        .next()
        .expect("session cookie")
        .into_owned();

    let list = |cookie: Cookie<'static>| {
        test::TestRequest::get()
            .uri("/api/users")
            .cookie(cookie)
            .to_request()
    };

    let as_admin = test::call_service(&app, list(session.clone())).await;
    assert_eq!(as_admin.status(), StatusCode::OK);

    set_role(&repo, user_id, UserRole::Manager);

    let demoted = test::call_service(&app, list(session.clone())).await;
    assert_eq!(demoted.status(), StatusCode::FORBIDDEN);

    repo.delete_user(user_id).expect("delete user");

    let deleted = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/users/current")
            .cookie(session)
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::UNAUTHORIZED);
}
