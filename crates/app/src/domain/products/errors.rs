//! Products service errors.

use std::num::TryFromIntError;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product code already exists")]
    AlreadyExists,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage unavailable: {0}")]
    Sql(#[source] Error),

    #[error("invalid price value")]
    InvalidPrice(#[from] TryFromIntError),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rejects_overflow() {
        let result = i64::try_from(u64::MAX).map_err(ProductsServiceError::from);

        assert!(matches!(result, Err(ProductsServiceError::InvalidPrice(_))));
    }

    #[test]
    fn test_pool_errors_are_storage_errors() {
        let error = ProductsServiceError::from(Error::PoolTimedOut);

        assert!(matches!(error, ProductsServiceError::Sql(Error::PoolTimedOut)));
        assert!(error.to_string().starts_with("storage unavailable"));
    }
}
