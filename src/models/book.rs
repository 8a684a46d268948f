//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::timestamp_to_date;
use crate::query::{ColumnType, TableSchema};

/// Book row. Columns left out of a field selection decode to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    #[sqlx(default)]
    pub id: i32,
    #[sqlx(default)]
    pub title: String,
    #[sqlx(default)]
    pub author_id: i32,
    /// Unix seconds
    #[sqlx(default)]
    pub published_at: i64,
}

impl Book {
    pub const SCHEMA: TableSchema = TableSchema {
        name: "books",
        columns: &[
            ("id", ColumnType::Integer),
            ("title", ColumnType::Text),
            ("author_id", ColumnType::Integer),
            ("published_at", ColumnType::BigInt),
        ],
    };

    pub fn to_response(&self) -> BookResponse {
        BookResponse {
            id: self.id,
            title: self.title.clone(),
            author_id: self.author_id,
            published_at: timestamp_to_date(self.published_at),
        }
    }
}

/// Book as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    /// Publication date (YYYY-MM-DD)
    pub published_at: String,
}

/// Create / update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub author_id: i32,
    /// Publication date (YYYY-MM-DD)
    pub published_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_response() {
        let book = Book {
            id: 3,
            title: "The Go Programming Language".into(),
            author_id: 2,
            published_at: 1_446_336_000,
        };
        let response = book.to_response();
        assert_eq!(response.published_at, "2015-11-01");
        assert_eq!(response.author_id, 2);
    }

    #[test]
    fn test_request_validation() {
        let request = BookRequest {
            title: String::new(),
            author_id: 1,
            published_at: "2015-11-01".into(),
        };
        assert!(request.validate().is_err());
    }
}
