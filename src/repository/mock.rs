use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, ProductReader, ProductWriter, RepositoryResult,
    SupplierReader, SupplierWriter, TransactionReader, TransactionWriter, UserReader, UserWriter,
};
use crate::domain::{
    category::{Category, NewCategory, UpdateCategory},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    supplier::{NewSupplier, Supplier, UpdateSupplier},
    transaction::{NewTransaction, Transaction, TransactionListQuery, TransactionStatus},
    user::{NewUser, UpdateUser, User},
};

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
        fn category_exists(&self, id: i32) -> RepositoryResult<bool>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn product_exists(&self, id: i32) -> RepositoryResult<bool>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub SupplierReader {}

    impl SupplierReader for SupplierReader {
        fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
        fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>>;
        fn supplier_exists(&self, id: i32) -> RepositoryResult<bool>;
    }
}

mock! {
    pub SupplierWriter {}

    impl SupplierWriter for SupplierWriter {
        fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
        fn update_supplier(&self, supplier_id: i32, updates: &UpdateSupplier) -> RepositoryResult<Supplier>;
        fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self) -> RepositoryResult<Vec<User>>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
        fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub TransactionReader {}

    impl TransactionReader for TransactionReader {
        fn get_transaction_by_id(&self, id: i32) -> RepositoryResult<Option<Transaction>>;
        fn list_transactions(&self, query: TransactionListQuery) -> RepositoryResult<(usize, Vec<Transaction>)>;
    }
}

mock! {
    pub TransactionWriter {}

    impl TransactionWriter for TransactionWriter {
        fn record_transaction(&self, new_transaction: &NewTransaction) -> RepositoryResult<Transaction>;
        fn update_transaction_status(&self, transaction_id: i32, status: TransactionStatus) -> RepositoryResult<Transaction>;
    }
}
