//! Borrows repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::fetch_list;
use crate::{
    error::{AppError, AppResult},
    models::Borrow,
    query::QueryOptions,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowRepository: Send + Sync {
    async fn list(&self, opts: &QueryOptions) -> AppResult<Vec<Borrow>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Borrow>>;
    /// Insert and return the new id
    async fn create(&self, borrow: &Borrow) -> AppResult<i32>;
    async fn update(&self, borrow: &Borrow) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgBorrowRepository {
    pool: Pool<Postgres>,
}

impl PgBorrowRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BorrowRepository for PgBorrowRepository {
    async fn list(&self, opts: &QueryOptions) -> AppResult<Vec<Borrow>> {
        fetch_list(&self.pool, &Borrow::SCHEMA, opts).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Borrow>> {
        let borrow = sqlx::query_as::<_, Borrow>(
            "SELECT id, book_id, user_name, borrowed_at FROM borrows WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(borrow)
    }

    async fn create(&self, borrow: &Borrow) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO borrows (book_id, user_name, borrowed_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(borrow.book_id)
        .bind(&borrow.user_name)
        .bind(borrow.borrowed_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, borrow: &Borrow) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE borrows SET book_id = $1, user_name = $2, borrowed_at = $3 WHERE id = $4",
        )
        .bind(borrow.book_id)
        .bind(&borrow.user_name)
        .bind(borrow.borrowed_at)
        .bind(borrow.id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Borrow {} not found", borrow.id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM borrows WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Borrow {} not found", id)));
        }
        Ok(())
    }
}
