//! Error types shared by all repository implementations.

use diesel::result::DatabaseErrorKind;
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// An insert or update violated a unique constraint.
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),
    /// An insert or update referenced a missing parent record.
    #[error("foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),
    /// A stored value failed domain type constraints.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// Failed to check a connection out of the pool.
    #[error("connection pool error: {0}")]
    PoolError(#[from] diesel::r2d2::PoolError),
    /// Any other database failure.
    #[error("database error: {0}")]
    DatabaseError(diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(info.message().to_string())
            }
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                Self::ForeignKeyViolation(info.message().to_string())
            }
            other => Self::DatabaseError(other),
        }
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
