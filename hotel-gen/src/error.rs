//! Error types for hotel generation

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Generation and mapping errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// A content pool had nothing to pick from
    #[error("Empty pool: {pool}")]
    EmptyPool { pool: &'static str },

    /// A stay date could not be parsed
    #[error("Invalid {field} date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

/// Result type for generation operations
pub type GenResult<T> = Result<T, GenError>;

impl From<GenError> for AppError {
    fn from(err: GenError) -> Self {
        let message = err.to_string();
        match err {
            GenError::InvalidDate { field, value } => AppError::invalid_stay_date(field, value),
            GenError::EmptyPool { pool } => {
                AppError::with_message(ErrorCode::EmptyContentPool, message)
                    .with_detail("pool", pool)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_maps_to_stay_date_code() {
        let err: AppError = GenError::InvalidDate {
            field: "checkIn",
            value: "tomorrow".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidStayDate);
        assert_eq!(err.http_status(), shared::http::StatusCode::BAD_REQUEST);
        let details = err.details.unwrap();
        assert_eq!(details["field"], "checkIn");
        assert_eq!(details["value"], "tomorrow");
    }

    #[test]
    fn test_empty_pool_is_a_server_error() {
        let err: AppError = GenError::EmptyPool { pool: "hotel names" }.into();
        assert_eq!(err.code, ErrorCode::EmptyContentPool);
        assert_eq!(err.code.code(), 4004);
        assert_eq!(err.details.as_ref().unwrap()["pool"], "hotel names");
        assert_eq!(err.message, "Empty pool: hotel names");
        assert_eq!(err.http_status(), shared::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
