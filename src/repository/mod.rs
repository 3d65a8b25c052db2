use crate::db::{DbConnection, DbPool};
use crate::domain::{
    category::{Category, NewCategory, UpdateCategory},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    supplier::{NewSupplier, Supplier, UpdateSupplier},
    transaction::{NewTransaction, Transaction, TransactionListQuery, TransactionStatus},
    user::{NewUser, UpdateUser, User},
};

pub mod category;
pub mod errors;
pub mod product;
pub mod supplier;
pub mod transaction;
pub mod user;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    fn category_exists(&self, id: i32) -> RepositoryResult<bool>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    /// Returns the total number of matches alongside the requested page.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    fn product_exists(&self, id: i32) -> RepositoryResult<bool>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over supplier records.
pub trait SupplierReader {
    fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
    fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>>;
    fn supplier_exists(&self, id: i32) -> RepositoryResult<bool>;
}

/// Write operations over supplier records.
pub trait SupplierWriter {
    fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
    fn update_supplier(
        &self,
        supplier_id: i32,
        updates: &UpdateSupplier,
    ) -> RepositoryResult<Supplier>;
    fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over user records.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    /// Exact match against the stored (lowercased) email.
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
}

/// Write operations over user records.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
    fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over transaction records.
pub trait TransactionReader {
    fn get_transaction_by_id(&self, id: i32) -> RepositoryResult<Option<Transaction>>;
    /// Returns the total number of matches alongside the requested page.
    fn list_transactions(
        &self,
        query: TransactionListQuery,
    ) -> RepositoryResult<(usize, Vec<Transaction>)>;
}

/// Write operations over transaction records.
pub trait TransactionWriter {
    /// Insert the transaction and apply its stock delta to the product in a
    /// single database transaction. Fails with `Conflict` when the product
    /// does not hold enough stock and with `NotFound` when it does not exist.
    fn record_transaction(
        &self,
        new_transaction: &NewTransaction,
    ) -> RepositoryResult<Transaction>;
    fn update_transaction_status(
        &self,
        transaction_id: i32,
        status: TransactionStatus,
    ) -> RepositoryResult<Transaction>;
}
