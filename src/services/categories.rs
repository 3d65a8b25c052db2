use crate::domain::auth::AuthenticatedUser;
use crate::domain::category::Category;
use crate::forms::categories::CategoryForm;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult, ensure_admin, ensure_staff};

/// Lists every category, ordered by name.
pub fn list_categories<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    ensure_staff(user)?;

    repo.list_categories().map_err(ServiceError::from)
}

/// Fetches a single category.
pub fn get_category<R>(repo: &R, user: &AuthenticatedUser, category_id: i32) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    ensure_staff(user)?;

    repo.get_category_by_id(category_id)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new category.
pub fn create_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    ensure_admin(user)?;

    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Renames an existing category.
pub fn update_category<R>(
    repo: &R,
    user: &AuthenticatedUser,
    category_id: i32,
    form: CategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    ensure_admin(user)?;

    let update = form
        .into_update_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_category(category_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a category. Products filed under it become uncategorized.
pub fn delete_category<R>(repo: &R, user: &AuthenticatedUser, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    ensure_admin(user)?;

    repo.delete_category(category_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryError;
    use crate::repository::mock::{MockCategoryReader, MockCategoryWriter};
    use crate::services::test_support::{admin, fixed_datetime, manager};

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    #[test]
    fn list_categories_is_open_to_managers() {
        let mut repo = MockCategoryReader::new();
        repo.expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![sample_category(1, "Beverages"), sample_category(2, "Dairy")]));

        let categories = list_categories(&repo, &manager()).expect("expected success");

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Beverages");
    }

    #[test]
    fn get_category_reports_missing_as_not_found() {
        let mut repo = MockCategoryReader::new();
        repo.expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_category(&repo, &manager(), 99);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn create_category_requires_admin() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_create_category().never();
        let form = CategoryForm {
            name: "Retail".to_string(),
        };

        let result = create_category(&repo, &manager(), form);

        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[test]
    fn create_category_validates_form() {
        let repo = MockCategoryWriter::new();
        let form = CategoryForm {
            name: "   ".to_string(),
        };

        let result = create_category(&repo, &admin(), form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn create_category_persists_sanitized_name() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_create_category()
            .times(1)
            .withf(|new_category| new_category.name == "Fresh Produce")
            .returning(|new_category| Ok(sample_category(10, &new_category.name)));

        let form = CategoryForm {
            name: "  Fresh   Produce ".to_string(),
        };

        let created = create_category(&repo, &admin(), form).expect("expected success");

        assert_eq!(created.id, 10);
        assert_eq!(created.name, "Fresh Produce");
    }

    #[test]
    fn create_category_surfaces_duplicate_names() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_create_category()
            .times(1)
            .returning(|_| Err(RepositoryError::Conflict("UNIQUE constraint failed".into())));

        let form = CategoryForm {
            name: "Dairy".to_string(),
        };

        let result = create_category(&repo, &admin(), form);

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn update_category_renames_entry() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_update_category()
            .times(1)
            .withf(|category_id, updates| *category_id == 3 && updates.name == "Dry Goods")
            .returning(|id, updates| Ok(sample_category(id, &updates.name)));

        let form = CategoryForm {
            name: " Dry Goods ".to_string(),
        };

        let updated = update_category(&repo, &admin(), 3, form).expect("expected success");

        assert_eq!(updated.id, 3);
        assert_eq!(updated.name, "Dry Goods");
    }

    #[test]
    fn delete_category_reports_missing_entry() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_delete_category()
            .times(1)
            .withf(|category_id| *category_id == 2)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = delete_category(&repo, &admin(), 2);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
