use crate::domain::auth::AuthenticatedUser;
use crate::domain::supplier::Supplier;
use crate::forms::suppliers::SupplierForm;
use crate::repository::{SupplierReader, SupplierWriter};
use crate::services::{ServiceError, ServiceResult, ensure_admin, ensure_staff};

pub fn list_suppliers<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Supplier>>
where
    R: SupplierReader + ?Sized,
{
    ensure_staff(user)?;

    repo.list_suppliers().map_err(ServiceError::from)
}

pub fn get_supplier<R>(repo: &R, user: &AuthenticatedUser, supplier_id: i32) -> ServiceResult<Supplier>
where
    R: SupplierReader + ?Sized,
{
    ensure_staff(user)?;

    repo.get_supplier_by_id(supplier_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_supplier<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SupplierForm,
) -> ServiceResult<Supplier>
where
    R: SupplierWriter + ?Sized,
{
    ensure_admin(user)?;

    let new_supplier = form
        .into_new_supplier()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let supplier = repo.create_supplier(&new_supplier)?;
    log::info!("supplier {} created by user {}", supplier.id, user.id);

    Ok(supplier)
}

/// Replaces the editable fields of a supplier.
pub fn update_supplier<R>(
    repo: &R,
    user: &AuthenticatedUser,
    supplier_id: i32,
    form: SupplierForm,
) -> ServiceResult<Supplier>
where
    R: SupplierWriter + ?Sized,
{
    ensure_admin(user)?;

    let updates = form
        .into_update_supplier()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_supplier(supplier_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a supplier that no transaction references.
pub fn delete_supplier<R>(repo: &R, user: &AuthenticatedUser, supplier_id: i32) -> ServiceResult<()>
where
    R: SupplierWriter + ?Sized,
{
    ensure_admin(user)?;

    repo.delete_supplier(supplier_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryError;
    use crate::repository::mock::{MockSupplierReader, MockSupplierWriter};
    use crate::services::test_support::{admin, fixed_datetime, manager};

    fn sample_supplier(id: i32, name: &str) -> Supplier {
        Supplier {
            id,
            name: name.to_string(),
            contact_info: None,
            address: None,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    #[test]
    fn list_suppliers_allows_managers() {
        let mut repo = MockSupplierReader::new();
        repo.expect_list_suppliers()
            .times(1)
            .returning(|| Ok(vec![sample_supplier(1, "Acme")]));

        let suppliers = list_suppliers(&repo, &manager()).expect("expected success");

        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].name, "Acme");
    }

    #[test]
    fn get_supplier_reports_missing_as_not_found() {
        let mut repo = MockSupplierReader::new();
        repo.expect_get_supplier_by_id()
            .times(1)
            .withf(|id| *id == 9)
            .returning(|_| Ok(None));

        assert!(matches!(
            get_supplier(&repo, &manager(), 9),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn create_supplier_trims_fields() {
        let mut repo = MockSupplierWriter::new();
        repo.expect_create_supplier()
            .times(1)
            .withf(|new_supplier| {
                new_supplier.name == "Acme" && new_supplier.contact_info.as_deref() == Some("555-0100")
            })
            .returning(|new_supplier| Ok(sample_supplier(3, &new_supplier.name)));

        let form = SupplierForm {
            name: "  Acme ".to_string(),
            contact_info: Some(" 555-0100 ".to_string()),
            address: None,
        };

        let created = create_supplier(&repo, &admin(), form).expect("expected success");

        assert_eq!(created.id, 3);
    }

    #[test]
    fn create_supplier_rejects_blank_name() {
        let mut repo = MockSupplierWriter::new();
        repo.expect_create_supplier().never();

        let form = SupplierForm {
            name: "   ".to_string(),
            contact_info: None,
            address: None,
        };

        assert!(matches!(
            create_supplier(&repo, &admin(), form),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn update_supplier_requires_admin() {
        let mut repo = MockSupplierWriter::new();
        repo.expect_update_supplier().never();

        let form = SupplierForm {
            name: "Acme".to_string(),
            contact_info: None,
            address: None,
        };

        assert!(matches!(
            update_supplier(&repo, &manager(), 1, form),
            Err(ServiceError::Forbidden)
        ));
    }

    #[test]
    fn delete_supplier_in_use_reports_conflict() {
        let mut repo = MockSupplierWriter::new();
        repo.expect_delete_supplier()
            .times(1)
            .returning(|_| Err(RepositoryError::Conflict("FOREIGN KEY constraint failed".into())));

        assert!(matches!(
            delete_supplier(&repo, &admin(), 2),
            Err(ServiceError::Conflict(_))
        ));
    }
}
