//! Error types for the borrow book server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::QueryRejection;
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;

/// Application error codes returned in the `code` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    DbFailure = 2,
    NoSuchData = 3,
    BadValue = 4,
    InvalidQuery = 5,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e.as_database_error() {
            // Dangling author_id / book_id in a request body
            Some(db) if db.is_foreign_key_violation() => {
                let constraint = db.constraint().unwrap_or("foreign key");
                AppError::BadRequest(format!("referenced record does not exist ({})", constraint))
            }
            _ => AppError::Database(e),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::Query(e) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidQuery, e.to_string()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::NotFound("Book 1 not found".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("title".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Query(QueryError::InvalidFilterFormat("x".into())),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::Database(sqlx::Error::RowNotFound), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_database_message_is_masked() {
        let (_, code, message) = AppError::Database(sqlx::Error::PoolTimedOut).parts();
        assert_eq!(code, ErrorCode::DbFailure);
        assert_eq!(message, "Database error");
    }

    #[derive(Debug)]
    struct ConstraintError {
        foreign_key: bool,
    }

    impl std::fmt::Display for ConstraintError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "constraint violated")
        }
    }

    impl std::error::Error for ConstraintError {}

    impl sqlx::error::DatabaseError for ConstraintError {
        fn message(&self) -> &str {
            "constraint violated"
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            Some("books_author_id_fkey")
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            if self.foreign_key {
                sqlx::error::ErrorKind::ForeignKeyViolation
            } else {
                sqlx::error::ErrorKind::Other
            }
        }
    }

    #[test]
    fn test_foreign_key_violation_is_bad_request() {
        let err = AppError::from(sqlx::Error::Database(Box::new(ConstraintError {
            foreign_key: true,
        })));
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, ErrorCode::BadValue);
        assert_eq!(message, "referenced record does not exist (books_author_id_fkey)");

        let other = AppError::from(sqlx::Error::Database(Box::new(ConstraintError {
            foreign_key: false,
        })));
        assert!(matches!(other, AppError::Database(_)));
    }

    #[test]
    fn test_query_error_message() {
        let (_, code, message) =
            AppError::from(QueryError::InvalidSortOrder("up".into())).parts();
        assert_eq!(code, ErrorCode::InvalidQuery);
        assert_eq!(message, "invalid sort order: up");
    }
}
