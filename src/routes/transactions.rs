use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::transactions::{
    TransactionRequest, TransactionsByMonthQuery, TransactionsQuery, UpdateTransactionStatusForm,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::transactions as transaction_service;

#[post("/transactions/purchase")]
pub async fn purchase(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    request: web::Json<TransactionRequest>,
) -> impl Responder {
    match transaction_service::restock_inventory(repo.get_ref(), &user, &request) {
        Ok(transaction) => HttpResponse::Created().json(transaction),
        Err(err) => error_response("record purchase", err),
    }
}

#[post("/transactions/sell")]
pub async fn sell(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    request: web::Json<TransactionRequest>,
) -> impl Responder {
    match transaction_service::sell(repo.get_ref(), &user, &request) {
        Ok(transaction) => HttpResponse::Created().json(transaction),
        Err(err) => error_response("record sale", err),
    }
}

#[post("/transactions/return")]
pub async fn return_to_supplier(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    request: web::Json<TransactionRequest>,
) -> impl Responder {
    match transaction_service::return_to_supplier(repo.get_ref(), &user, &request) {
        Ok(transaction) => HttpResponse::Created().json(transaction),
        Err(err) => error_response("record return", err),
    }
}

#[get("/transactions")]
pub async fn list_transactions(
    params: web::Query<TransactionsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match transaction_service::list_transactions(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response("list transactions", err),
    }
}

#[get("/transactions/by-month")]
pub async fn list_transactions_by_month(
    params: web::Query<TransactionsByMonthQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match transaction_service::list_transactions_by_month(repo.get_ref(), &user, params.into_inner())
    {
        Ok(transactions) => HttpResponse::Ok().json(transactions),
        Err(err) => error_response("list transactions by month", err),
    }
}

#[get("/transactions/{transaction_id}")]
pub async fn get_transaction(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match transaction_service::get_transaction(repo.get_ref(), &user, path.into_inner()) {
        Ok(transaction) => HttpResponse::Ok().json(transaction),
        Err(err) => error_response("load transaction", err),
    }
}

#[put("/transactions/{transaction_id}/status")]
pub async fn update_transaction_status(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<UpdateTransactionStatusForm>,
) -> impl Responder {
    let transaction_id = path.into_inner();

    match transaction_service::update_transaction_status(
        repo.get_ref(),
        &user,
        transaction_id,
        form.into_inner(),
    ) {
        Ok(transaction) => HttpResponse::Ok().json(transaction),
        Err(err) => error_response("update transaction status", err),
    }
}
