//! Connectivity checks and the raw SQL console

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SystemRepository: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
    /// Run a caller supplied row-returning statement, one JSON object per row
    async fn run_raw_query(&self, sql: &str) -> AppResult<Vec<Value>>;
}

#[derive(Clone)]
pub struct PgSystemRepository {
    pool: Pool<Postgres>,
}

impl PgSystemRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Wrap a statement so every row comes back as a single JSON column
pub(crate) fn wrap_as_json_rows(sql: &str) -> Option<String> {
    let statement = sql.trim().trim_end_matches(';').trim_end();
    if statement.is_empty() {
        return None;
    }
    Some(format!("SELECT row_to_json(raw_rows) FROM ({}) AS raw_rows", statement))
}

#[async_trait]
impl SystemRepository for PgSystemRepository {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn run_raw_query(&self, sql: &str) -> AppResult<Vec<Value>> {
        let wrapped = wrap_as_json_rows(sql)
            .ok_or_else(|| AppError::BadRequest("query must not be empty".to_string()))?;

        let rows = sqlx::query_scalar::<_, Value>(&wrapped)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_as_json_rows() {
        assert_eq!(
            wrap_as_json_rows(" SELECT id FROM books; ").as_deref(),
            Some("SELECT row_to_json(raw_rows) FROM (SELECT id FROM books) AS raw_rows")
        );
        assert_eq!(wrap_as_json_rows("  ;"), None);
        assert_eq!(wrap_as_json_rows(""), None);
    }
}
