use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use inventory_management::config::ServerConfig;
use inventory_management::db::establish_connection_pool;
use inventory_management::repository::DieselRepository;
use inventory_management::routes::auth::{login, logout, register};
use inventory_management::routes::categories::{
    create_category, delete_category, get_category, list_categories, update_category,
};
use inventory_management::routes::products::{
    create_product, delete_product, get_product, list_products, update_product,
};
use inventory_management::routes::suppliers::{
    create_supplier, delete_supplier, get_supplier, list_suppliers, update_supplier,
};
use inventory_management::routes::transactions::{
    get_transaction, list_transactions, list_transactions_by_month, purchase,
    return_to_supplier, sell, update_transaction_status,
};
use inventory_management::routes::users::{current_user, delete_user, list_users, update_user};
use inventory_management::routes::{json_error_handler, query_error_handler};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let secret_key = match config.secret.as_deref() {
        Some(secret) if secret.len() >= 64 => Key::from(secret.as_bytes()),
        Some(_) => {
            log::error!("SECRET_KEY must be at least 64 bytes long");
            std::process::exit(1);
        }
        None => {
            log::warn!("SECRET_KEY not set, sessions will not survive a restart");
            Key::generate()
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let domain = config.domain.clone();
    log::info!("Listening on {}:{}", config.address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::Data::new(repo.clone()))
            .service(
                web::scope("/auth")
                    .service(register)
                    .service(login)
                    .service(logout),
            )
            .service(
                web::scope("/api")
                    .service(list_categories)
                    .service(create_category)
                    .service(get_category)
                    .service(update_category)
                    .service(delete_category)
                    .service(list_products)
                    .service(create_product)
                    .service(get_product)
                    .service(update_product)
                    .service(delete_product)
                    .service(list_suppliers)
                    .service(create_supplier)
                    .service(get_supplier)
                    .service(update_supplier)
                    .service(delete_supplier)
                    .service(list_users)
                    .service(current_user)
                    .service(update_user)
                    .service(delete_user)
                    .service(purchase)
                    .service(sell)
                    .service(return_to_supplier)
                    .service(list_transactions)
                    .service(list_transactions_by_month)
                    .service(get_transaction)
                    .service(update_transaction_status),
            )
    })
    .bind((config.address, config.port))?
    .run()
    .await
}
