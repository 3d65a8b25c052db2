use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Result alias used by every repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage failures surfaced by the repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,
    /// A uniqueness, foreign key or stock constraint rejected the change.
    #[error("conflict: {0}")]
    Conflict(String),
    /// No connection could be checked out of the pool.
    #[error("database connection error: {0}")]
    Connection(String),
    /// Any other database failure.
    #[error("unexpected database error: {0}")]
    Unexpected(String),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(kind, info) => match kind {
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::CheckViolation => {
                    RepositoryError::Conflict(info.message().to_string())
                }
                _ => RepositoryError::Unexpected(info.message().to_string()),
            },
            other => RepositoryError::Unexpected(other.to_string()),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(value: PoolError) -> Self {
        RepositoryError::Connection(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let err = RepositoryError::from(DieselError::NotFound);

        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn rollback_errors_are_unexpected() {
        let err = RepositoryError::from(DieselError::RollbackTransaction);

        assert!(matches!(err, RepositoryError::Unexpected(_)));
    }
}
