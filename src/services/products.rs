use crate::domain::auth::AuthenticatedUser;
use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::{AddProductForm, EditProductForm, ProductsQuery};
use crate::pagination::{Paginated, page_request};
use crate::repository::{CategoryReader, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult, ensure_admin, ensure_staff};

/// Lists products page by page, optionally filtered by search term or category.
pub fn list_products<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ProductsQuery,
) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader + ?Sized,
{
    ensure_staff(user)?;

    let ProductsQuery {
        search,
        category_id,
        page,
        per_page,
    } = query;

    let pagination = page_request(page, per_page);
    let mut list_query = ProductListQuery::new().paginate(pagination.page, pagination.per_page);

    if let Some(term) = search.as_deref().map(str::trim).filter(|term| !term.is_empty()) {
        list_query = list_query.search(term);
    }

    if let Some(category_id) = category_id {
        list_query = list_query.category_id(category_id);
    }

    let (total, items) = repo.list_products(list_query)?;

    Ok(Paginated::new(items, pagination, total))
}

/// Fetches a single product.
pub fn get_product<R>(repo: &R, user: &AuthenticatedUser, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    ensure_staff(user)?;

    repo.get_product_by_id(product_id)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new product, checking that its category exists.
pub fn create_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + CategoryReader + ?Sized,
{
    ensure_admin(user)?;

    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(category_id) = new_product.category_id {
        ensure_category_exists(repo, category_id)?;
    }

    repo.create_product(&new_product)
        .map_err(ServiceError::from)
}

/// Applies a partial update to a product.
pub fn update_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    product_id: i32,
    form: EditProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + CategoryReader + ?Sized,
{
    ensure_admin(user)?;

    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(Some(category_id)) = updates.category_id {
        ensure_category_exists(repo, category_id)?;
    }

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a product. Products with recorded transactions cannot be deleted.
pub fn delete_product<R>(repo: &R, user: &AuthenticatedUser, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    ensure_admin(user)?;

    repo.delete_product(product_id)
        .map_err(ServiceError::from)
}

fn ensure_category_exists<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryReader + ?Sized,
{
    if repo.category_exists(category_id)? {
        Ok(())
    } else {
        Err(ServiceError::Form(format!(
            "category {category_id} does not exist"
        )))
    }
}
