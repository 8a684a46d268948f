//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod borrows;
pub mod system;

use std::sync::Arc;

use sqlx::{postgres::PgRow, FromRow, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    query::{build_select_query, ColumnType, QueryOptions, TableSchema},
};

pub use authors::{AuthorRepository, PgAuthorRepository};
pub use books::{BookRepository, PgBookRepository};
pub use borrows::{BorrowRepository, PgBorrowRepository};
pub use system::{PgSystemRepository, SystemRepository};

/// Main repository struct holding one handle per table
#[derive(Clone)]
pub struct Repository {
    pub authors: Arc<dyn AuthorRepository>,
    pub books: Arc<dyn BookRepository>,
    pub borrows: Arc<dyn BorrowRepository>,
    pub system: Arc<dyn SystemRepository>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: Arc::new(PgAuthorRepository::new(pool.clone())),
            books: Arc::new(PgBookRepository::new(pool.clone())),
            borrows: Arc::new(PgBorrowRepository::new(pool.clone())),
            system: Arc::new(PgSystemRepository::new(pool)),
        }
    }
}

/// Run a list query against `schema`.
///
/// Every identifier in `opts` must be a column of the table. Filter values are
/// bound with the column's type so integer columns compare as integers.
pub(crate) async fn fetch_list<T>(
    pool: &Pool<Postgres>,
    schema: &TableSchema,
    opts: &QueryOptions,
) -> AppResult<Vec<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    schema.validate(opts)?;

    let (sql, args) = build_select_query(schema.name, opts);
    tracing::debug!("List query on {}: {} {:?}", schema.name, sql, args);

    let mut query = sqlx::query_as::<_, T>(&sql);
    for (filter, value) in opts.filters.iter().zip(args) {
        query = match schema.bind_type(&filter.field, filter.sql_operator()) {
            Some(ColumnType::Integer) => query.bind(parse_arg::<i32>(&filter.field, &value)?),
            Some(ColumnType::BigInt) => query.bind(parse_arg::<i64>(&filter.field, &value)?),
            Some(ColumnType::Text) | None => query.bind(value),
        };
    }

    Ok(query.fetch_all(pool).await?)
}

fn parse_arg<N: std::str::FromStr>(field: &str, value: &str) -> AppResult<N> {
    value
        .parse::<N>()
        .map_err(|_| AppError::BadRequest(format!("invalid value '{}' for {}", value, field)))
}
