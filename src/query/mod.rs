//! List query translation: raw `filter` / `sort` / `fields` query parameters
//! into a parameterized `SELECT`.
//!
//! The translator is resource-agnostic and pure. Identifiers are interpolated
//! as given; callers must check them against a [`TableSchema`] before the
//! statement reaches the database.

pub mod builder;
pub mod parser;
pub mod schema;

use thiserror::Error;

pub use builder::build_select_query;
pub use parser::{parse_fields, parse_filters, parse_sorts};
pub use schema::{ColumnType, TableSchema};

/// Delimiter between the parts of a filter or sort token.
pub const TOKEN_DELIMITER: &str = "__";

/// Errors raised while reading list query parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid filter format: {0}")]
    InvalidFilterFormat(String),

    #[error("invalid sort format: {0}")]
    InvalidSortFormat(String),

    #[error("invalid sort order: {0}")]
    InvalidSortOrder(String),

    #[error("unknown column '{column}' for table {table}")]
    UnknownColumn { table: String, column: String },

    #[error("operator '{operator}' is not supported on column '{column}'")]
    UnsupportedOperator { column: String, operator: String },
}

/// Comparison operator of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    ILike,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl FilterOperator {
    /// Resolve a raw operator token. Unrecognized tokens fall back to `Eq`.
    pub fn from_token(token: &str) -> Self {
        Self::parse_token(token).unwrap_or(FilterOperator::Eq)
    }

    /// Strict lookup, `None` for tokens outside the operator table
    pub fn parse_token(token: &str) -> Option<Self> {
        match token {
            "eq" => Some(FilterOperator::Eq),
            "ilike" => Some(FilterOperator::ILike),
            "gt" => Some(FilterOperator::Gt),
            "gte" => Some(FilterOperator::Gte),
            "lt" => Some(FilterOperator::Lt),
            "lte" => Some(FilterOperator::Lte),
            _ => None,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::ILike => "ILIKE",
            FilterOperator::Gt => ">",
            FilterOperator::Gte => ">=",
            FilterOperator::Lt => "<",
            FilterOperator::Lte => "<=",
        }
    }
}

/// A single `field__operator__value` predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    /// Raw operator token, interpreted by the builder
    pub operator: String,
    pub value: String,
}

impl Filter {
    pub fn sql_operator(&self) -> FilterOperator {
        FilterOperator::from_token(&self.operator)
    }

    /// Whether the operator token is one the builder knows about
    pub fn has_known_operator(&self) -> bool {
        FilterOperator::parse_token(&self.operator).is_some()
    }
}

/// A single ordering key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub descending: bool,
}

/// Filters, sorts and selected fields of one list request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub filters: Vec<Filter>,
    pub sorts: Vec<Sort>,
    /// Empty means every column
    pub fields: Vec<String>,
}

impl QueryOptions {
    /// Parse the three raw list parameters into options
    pub fn from_raw(
        raw_filters: &[String],
        raw_sorts: &[String],
        raw_fields: &str,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            filters: parse_filters(raw_filters)?,
            sorts: parse_sorts(raw_sorts)?,
            fields: parse_fields(raw_fields),
        })
    }

    /// Filters whose operator silently degrades to `=`
    pub fn unknown_operators(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter().filter(|f| !f.has_known_operator())
    }
}
