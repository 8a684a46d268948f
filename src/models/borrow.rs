//! Borrow record model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::timestamp_to_date;
use crate::query::{ColumnType, TableSchema};

/// Borrow row. Columns left out of a field selection decode to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Borrow {
    #[sqlx(default)]
    pub id: i32,
    #[sqlx(default)]
    pub book_id: i32,
    /// Name of the borrower (nullable for rows older than the column)
    #[sqlx(default)]
    pub user_name: Option<String>,
    /// Unix seconds
    #[sqlx(default)]
    pub borrowed_at: i64,
}

impl Borrow {
    pub const SCHEMA: TableSchema = TableSchema {
        name: "borrows",
        columns: &[
            ("id", ColumnType::Integer),
            ("book_id", ColumnType::Integer),
            ("user_name", ColumnType::Text),
            ("borrowed_at", ColumnType::BigInt),
        ],
    };

    pub fn to_response(&self) -> BorrowResponse {
        BorrowResponse {
            id: self.id,
            book_id: self.book_id,
            user_name: self.user_name.clone().unwrap_or_default(),
            borrowed_at: timestamp_to_date(self.borrowed_at),
        }
    }
}

/// Borrow record as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BorrowResponse {
    pub id: i32,
    pub book_id: i32,
    pub user_name: String,
    /// Borrow date (YYYY-MM-DD)
    pub borrowed_at: String,
}

/// Create / update borrow request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BorrowRequest {
    pub book_id: i32,
    #[validate(length(min = 1, max = 255, message = "User name must be 1-255 characters"))]
    pub user_name: String,
    /// Borrow date (YYYY-MM-DD)
    pub borrowed_at: String,
}
