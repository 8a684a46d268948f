//! Data models for the library

pub mod author;
pub mod book;
pub mod borrow;

use chrono::{DateTime, NaiveDate};

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use author::{Author, AuthorRequest, AuthorResponse};
pub use book::{Book, BookRequest, BookResponse};
pub use borrow::{Borrow, BorrowRequest, BorrowResponse};

/// Calendar date format exchanged over the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date into unix seconds at midnight UTC
pub fn date_to_timestamp(field: &str, value: &str) -> AppResult<i64> {
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::BadRequest(format!("invalid {} format", field)))?;
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc().timestamp())
        .ok_or_else(|| AppError::BadRequest(format!("invalid {} format", field)))
}

/// Format unix seconds as a `YYYY-MM-DD` UTC date
pub fn timestamp_to_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .format(DATE_FORMAT)
        .to_string()
}
