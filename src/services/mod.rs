use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod admin;
pub mod categories;
pub mod topics;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request payload failed validation.
    #[error("{0}")]
    Validation(String),
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The operation conflicts with existing data, e.g. a duplicate name.
    #[error("{0}")]
    Conflict(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::UniqueViolation(message) => Self::Conflict(message),
            RepositoryError::ForeignKeyViolation(message) => Self::Validation(message),
            other => {
                log::error!("Repository failure: {other}");
                Self::Internal
            }
        }
    }
}
