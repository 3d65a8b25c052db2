use diesel::dsl::{exists, select};
use diesel::prelude::*;

use crate::{
    domain::supplier::{
        NewSupplier as DomainNewSupplier, Supplier as DomainSupplier,
        UpdateSupplier as DomainUpdateSupplier,
    },
    models::supplier::{
        NewSupplier as DbNewSupplier, Supplier as DbSupplier, UpdateSupplier as DbUpdateSupplier,
    },
    repository::{
        DieselRepository, RepositoryError, RepositoryResult, SupplierReader, SupplierWriter,
    },
};

impl SupplierReader for DieselRepository {
    fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSupplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let supplier = suppliers::table
            .filter(suppliers::id.eq(id))
            .first::<DbSupplier>(&mut conn)
            .optional()?;

        Ok(supplier.map(Into::into))
    }

    fn list_suppliers(&self) -> RepositoryResult<Vec<DomainSupplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let suppliers = suppliers::table
            .order((suppliers::name.asc(), suppliers::id.asc()))
            .load::<DbSupplier>(&mut conn)?;

        Ok(suppliers.into_iter().map(Into::into).collect())
    }

    fn supplier_exists(&self, id: i32) -> RepositoryResult<bool> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let found = select(exists(suppliers::table.filter(suppliers::id.eq(id))))
            .get_result::<bool>(&mut conn)?;

        Ok(found)
    }
}

impl SupplierWriter for DieselRepository {
    fn create_supplier(
        &self,
        new_supplier: &DomainNewSupplier,
    ) -> RepositoryResult<DomainSupplier> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let db_new = DbNewSupplier::from(new_supplier);

        let created = diesel::insert_into(suppliers::table)
            .values(&db_new)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(created.into())
    }

    fn update_supplier(
        &self,
        supplier_id: i32,
        updates: &DomainUpdateSupplier,
    ) -> RepositoryResult<DomainSupplier> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateSupplier::from(updates);

        let updated = diesel::update(suppliers::table.filter(suppliers::id.eq(supplier_id)))
            .set(&db_updates)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(suppliers::table.filter(suppliers::id.eq(supplier_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
