//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::query::{ColumnType, TableSchema};

/// Author row. Columns left out of a field selection decode to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Author {
    #[sqlx(default)]
    pub id: i32,
    #[sqlx(default)]
    pub name: String,
}

impl Author {
    pub const SCHEMA: TableSchema = TableSchema {
        name: "authors",
        columns: &[("id", ColumnType::Integer), ("name", ColumnType::Text)],
    };

    pub fn to_response(&self) -> AuthorResponse {
        AuthorResponse {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Author as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorResponse {
    pub id: i32,
    pub name: String,
}

/// Create / update author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthorRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}
