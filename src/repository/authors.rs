//! Authors repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::fetch_list;
use crate::{
    error::{AppError, AppResult},
    models::Author,
    query::QueryOptions,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn list(&self, opts: &QueryOptions) -> AppResult<Vec<Author>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Author>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>>;
    /// Insert and return the new id
    async fn create(&self, author: &Author) -> AppResult<i32>;
    async fn update(&self, author: &Author) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgAuthorRepository {
    pool: Pool<Postgres>,
}

impl PgAuthorRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn list(&self, opts: &QueryOptions) -> AppResult<Vec<Author>> {
        fetch_list(&self.pool, &Author::SCHEMA, opts).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, name FROM authors WHERE name = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(author)
    }

    async fn create(&self, author: &Author) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>("INSERT INTO authors (name) VALUES ($1) RETURNING id")
            .bind(&author.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, author: &Author) -> AppResult<()> {
        let result = sqlx::query("UPDATE authors SET name = $1 WHERE id = $2")
            .bind(&author.name)
            .bind(author.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author {} not found", author.id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }
        Ok(())
    }
}
