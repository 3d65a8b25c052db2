use diesel::prelude::*;

use crate::{
    domain::user::{NewUser as DomainNewUser, UpdateUser as DomainUpdateUser, User as DomainUser},
    models::user::{NewUser as DbNewUser, UpdateUser as DbUpdateUser, User as DbUser},
    repository::{DieselRepository, RepositoryError, RepositoryResult, UserReader, UserWriter},
};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::id.eq(id))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn list_users(&self) -> RepositoryResult<Vec<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let users = users::table
            .order(users::created_at.desc())
            .load::<DbUser>(&mut conn)?;

        Ok(users.into_iter().map(Into::into).collect())
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &DomainNewUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_new = DbNewUser::from(new_user);

        let created = diesel::insert_into(users::table)
            .values(&db_new)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }

    fn update_user(&self, user_id: i32, updates: &DomainUpdateUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateUser::from(updates);

        let updated = diesel::update(users::table.filter(users::id.eq(user_id)))
            .set(&db_updates)
            .get_result::<DbUser>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_user(&self, user_id: i32) -> RepositoryResult<()> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(users::table.filter(users::id.eq(user_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
