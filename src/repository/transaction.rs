use chrono::Local;
use diesel::dsl::{exists, select};
use diesel::prelude::*;

use crate::{
    domain::transaction::{
        NewTransaction as DomainNewTransaction, Transaction as DomainTransaction,
        TransactionListQuery, TransactionStatus,
    },
    models::transaction::{NewTransaction as DbNewTransaction, Transaction as DbTransaction},
    repository::{
        DieselRepository, RepositoryError, RepositoryResult, TransactionReader, TransactionWriter,
    },
};

impl TransactionReader for DieselRepository {
    fn get_transaction_by_id(&self, id: i32) -> RepositoryResult<Option<DomainTransaction>> {
        use crate::schema::transactions;

        let mut conn = self.conn()?;
        let transaction = transactions::table
            .filter(transactions::id.eq(id))
            .first::<DbTransaction>(&mut conn)
            .optional()?;

        Ok(transaction.map(Into::into))
    }

    fn list_transactions(
        &self,
        query: TransactionListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainTransaction>)> {
        use crate::schema::transactions;

        let mut conn = self.conn()?;

        let mut count_query = transactions::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            count_query = count_query.filter(
                transactions::description
                    .like(pattern.clone())
                    .or(transactions::note.like(pattern.clone()))
                    .or(transactions::status.like(pattern.clone()))
                    .or(transactions::transaction_type.like(pattern)),
            );
        }

        if let Some(product_id) = query.product_id {
            count_query = count_query.filter(transactions::product_id.eq(product_id));
        }

        if let Some(from) = query.created_from {
            count_query = count_query.filter(transactions::created_at.ge(from));
        }

        if let Some(before) = query.created_before {
            count_query = count_query.filter(transactions::created_at.lt(before));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = transactions::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            items = items.filter(
                transactions::description
                    .like(pattern.clone())
                    .or(transactions::note.like(pattern.clone()))
                    .or(transactions::status.like(pattern.clone()))
                    .or(transactions::transaction_type.like(pattern)),
            );
        }

        if let Some(product_id) = query.product_id {
            items = items.filter(transactions::product_id.eq(product_id));
        }

        if let Some(from) = query.created_from {
            items = items.filter(transactions::created_at.ge(from));
        }

        if let Some(before) = query.created_before {
            items = items.filter(transactions::created_at.lt(before));
        }

        items = items.order((transactions::created_at.desc(), transactions::id.desc()));

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let db_transactions = items.load::<DbTransaction>(&mut conn)?;

        Ok((total, db_transactions.into_iter().map(Into::into).collect()))
    }
}

impl TransactionWriter for DieselRepository {
    fn record_transaction(
        &self,
        new_transaction: &DomainNewTransaction,
    ) -> RepositoryResult<DomainTransaction> {
        use crate::schema::{products, transactions};

        let mut conn = self.conn()?;

        conn.transaction::<DomainTransaction, RepositoryError, _>(|conn| {
            let delta = new_transaction.stock_delta();
            let now = Local::now().naive_utc();

            // 0 <= stock + delta <= i32::MAX
            let ceiling = i32::MAX - delta.max(0);
            let adjusted = diesel::update(
                products::table
                    .filter(products::id.eq(new_transaction.product_id))
                    .filter(products::stock_quantity.ge(-delta))
                    .filter(products::stock_quantity.le(ceiling)),
            )
            .set((
                products::stock_quantity.eq(products::stock_quantity + delta),
                products::updated_at.eq(now),
            ))
            .execute(conn)?;

            if adjusted == 0 {
                let product_found = select(exists(
                    products::table.filter(products::id.eq(new_transaction.product_id)),
                ))
                .get_result::<bool>(conn)?;

                if product_found {
                    return Err(RepositoryError::Conflict(format!(
                        "stock for product {} cannot change by {delta}",
                        new_transaction.product_id
                    )));
                }
                return Err(RepositoryError::NotFound);
            }

            let insertable = DbNewTransaction::from(new_transaction);

            let created = diesel::insert_into(transactions::table)
                .values(&insertable)
                .get_result::<DbTransaction>(conn)?;

            Ok(created.into())
        })
    }

    fn update_transaction_status(
        &self,
        transaction_id: i32,
        status: TransactionStatus,
    ) -> RepositoryResult<DomainTransaction> {
        use crate::schema::transactions;

        let mut conn = self.conn()?;

        let status: &str = status.into();
        let updated = diesel::update(transactions::table.filter(transactions::id.eq(transaction_id)))
            .set((
                transactions::status.eq(status),
                transactions::updated_at.eq(Local::now().naive_utc()),
            ))
            .get_result::<DbTransaction>(&mut conn)?;

        Ok(updated.into())
    }
}
