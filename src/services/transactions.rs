use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::auth::AuthenticatedUser;
use crate::domain::transaction::{
    NewTransaction, Transaction, TransactionListQuery, TransactionStatus, TransactionType,
};
use crate::forms::FieldError;
use crate::forms::transactions::{
    TransactionRequest, TransactionsByMonthQuery, TransactionsQuery, UpdateTransactionStatusForm,
};
use crate::pagination::{Paginated, page_request};
use crate::repository::{ProductReader, SupplierReader, TransactionReader, TransactionWriter};
use crate::services::{ServiceError, ServiceResult, ensure_staff};

pub const SUPPLIER_ID_MESSAGE: &str = "Supplier id is required";

/// Records goods bought from a supplier. Stock grows by the quantity.
pub fn restock_inventory<R>(
    repo: &R,
    user: &AuthenticatedUser,
    request: &TransactionRequest,
) -> ServiceResult<Transaction>
where
    R: ProductReader + SupplierReader + TransactionWriter + ?Sized,
{
    record(
        repo,
        user,
        request,
        TransactionType::Purchase,
        TransactionStatus::Completed,
    )
}

/// Records goods sold to a customer. Stock must cover the quantity.
pub fn sell<R>(
    repo: &R,
    user: &AuthenticatedUser,
    request: &TransactionRequest,
) -> ServiceResult<Transaction>
where
    R: ProductReader + SupplierReader + TransactionWriter + ?Sized,
{
    record(
        repo,
        user,
        request,
        TransactionType::Sale,
        TransactionStatus::Completed,
    )
}

/// Records goods sent back to a supplier. The return stays `processing`
/// until the supplier confirms it.
pub fn return_to_supplier<R>(
    repo: &R,
    user: &AuthenticatedUser,
    request: &TransactionRequest,
) -> ServiceResult<Transaction>
where
    R: ProductReader + SupplierReader + TransactionWriter + ?Sized,
{
    record(
        repo,
        user,
        request,
        TransactionType::ReturnToSupplier,
        TransactionStatus::Processing,
    )
}

fn record<R>(
    repo: &R,
    user: &AuthenticatedUser,
    request: &TransactionRequest,
    transaction_type: TransactionType,
    status: TransactionStatus,
) -> ServiceResult<Transaction>
where
    R: ProductReader + SupplierReader + TransactionWriter + ?Sized,
{
    ensure_staff(user)?;

    let valid = request
        .validate_request()
        .map_err(ServiceError::Validation)?;

    let supplier_id = match transaction_type {
        TransactionType::Sale => None,
        TransactionType::Purchase | TransactionType::ReturnToSupplier => {
            let Some(supplier_id) = valid.supplier_id else {
                return Err(ServiceError::Validation(vec![FieldError::new(
                    "supplierId",
                    SUPPLIER_ID_MESSAGE,
                )]));
            };
            if !repo.supplier_exists(supplier_id)? {
                return Err(ServiceError::NotFound);
            }
            Some(supplier_id)
        }
    };

    let product = repo
        .get_product_by_id(valid.product_id)?
        .ok_or(ServiceError::NotFound)?;

    if transaction_type == TransactionType::Purchase {
        if product.stock_quantity.checked_add(valid.quantity).is_none() {
            return Err(ServiceError::Conflict(format!(
                "stock for product {} cannot grow by {}: {} already held",
                product.id, valid.quantity, product.stock_quantity
            )));
        }
    } else if product.stock_quantity < valid.quantity {
        return Err(ServiceError::Conflict(format!(
            "insufficient stock for product {}: {} available, {} requested",
            product.id, product.stock_quantity, valid.quantity
        )));
    }

    let total_price_cents = product
        .price_cents
        .checked_mul(i64::from(valid.quantity))
        .ok_or_else(|| ServiceError::Form("total price is too large".to_string()))?;

    let mut new_transaction = NewTransaction::new(
        transaction_type,
        user.id,
        product.id,
        valid.quantity,
        total_price_cents,
    )
    .with_status(status);
    if let Some(supplier_id) = supplier_id {
        new_transaction = new_transaction.with_supplier_id(supplier_id);
    }
    if let Some(description) = valid.description {
        new_transaction = new_transaction.with_description(description.to_string());
    }

    let transaction = repo.record_transaction(&new_transaction)?;
    log::info!(
        "{} of {} units of product {} recorded by user {}",
        transaction_type.as_str(),
        transaction.total_products,
        transaction.product_id,
        user.id
    );

    Ok(transaction)
}

/// Lists transactions newest first.
pub fn list_transactions<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: TransactionsQuery,
) -> ServiceResult<Paginated<Transaction>>
where
    R: TransactionReader + ?Sized,
{
    ensure_staff(user)?;

    let pagination = page_request(query.page, query.per_page);
    let mut list_query =
        TransactionListQuery::new().paginate(pagination.page, pagination.per_page);

    if let Some(term) = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
    {
        list_query = list_query.search(term);
    }

    if let Some(product_id) = query.product_id {
        list_query = list_query.product_id(product_id);
    }

    let (total, items) = repo.list_transactions(list_query)?;

    Ok(Paginated::new(items, pagination, total))
}

/// Lists every transaction created during the given calendar month.
pub fn list_transactions_by_month<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: TransactionsByMonthQuery,
) -> ServiceResult<Vec<Transaction>>
where
    R: TransactionReader + ?Sized,
{
    ensure_staff(user)?;

    let (from, before) = month_bounds(query.year, query.month)?;

    let (_, items) = repo.list_transactions(TransactionListQuery::new().created_between(from, before))?;

    Ok(items)
}

pub fn get_transaction<R>(
    repo: &R,
    user: &AuthenticatedUser,
    transaction_id: i32,
) -> ServiceResult<Transaction>
where
    R: TransactionReader + ?Sized,
{
    ensure_staff(user)?;

    repo.get_transaction_by_id(transaction_id)?
        .ok_or(ServiceError::NotFound)
}

/// Moves a transaction to another status. Stock is not touched.
pub fn update_transaction_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    transaction_id: i32,
    form: UpdateTransactionStatusForm,
) -> ServiceResult<Transaction>
where
    R: TransactionWriter + ?Sized,
{
    ensure_staff(user)?;

    let updated = repo.update_transaction_status(transaction_id, form.status)?;
    log::info!(
        "transaction {transaction_id} moved to {} by user {}",
        updated.status.as_str(),
        user.id
    );

    Ok(updated)
}

/// `[first day of month, first day of next month)` as naive datetimes.
fn month_bounds(year: i32, month: u32) -> ServiceResult<(NaiveDateTime, NaiveDateTime)> {
    let invalid = || ServiceError::Form(format!("invalid month {month}/{year}"));

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(invalid)?;

    Ok((start.and_time(chrono::NaiveTime::MIN), end.and_time(chrono::NaiveTime::MIN)))
}
