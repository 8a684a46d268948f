//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::fetch_list;
use crate::{
    error::{AppError, AppResult},
    models::Book,
    query::QueryOptions,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn list(&self, opts: &QueryOptions) -> AppResult<Vec<Book>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>>;
    async fn find_by_title_and_author(&self, title: &str, author_id: i32) -> AppResult<Option<Book>>;
    /// Insert and return the new id
    async fn create(&self, book: &Book) -> AppResult<i32>;
    async fn update(&self, book: &Book) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgBookRepository {
    pool: Pool<Postgres>,
}

impl PgBookRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list(&self, opts: &QueryOptions) -> AppResult<Vec<Book>> {
        fetch_list(&self.pool, &Book::SCHEMA, opts).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author_id, published_at FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn find_by_title_and_author(&self, title: &str, author_id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author_id, published_at
            FROM books
            WHERE title = $1 AND author_id = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(title)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    async fn create(&self, book: &Book) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO books (title, author_id, published_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&book.title)
        .bind(book.author_id)
        .bind(book.published_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, book: &Book) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE books SET title = $1, author_id = $2, published_at = $3 WHERE id = $4",
        )
        .bind(&book.title)
        .bind(book.author_id)
        .bind(book.published_at)
        .bind(book.id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", book.id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
