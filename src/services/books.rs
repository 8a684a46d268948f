//! Book catalog service

use std::sync::Arc;

use super::ListQuery;
use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::BookRepository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BookRepository>,
}

impl BooksService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// List books with filters, sorts and field selection
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Book>> {
        let opts = query.to_options(&Book::SCHEMA)?;
        self.repository.list(&opts).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Book> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn find_by_title_and_author(&self, title: &str, author_id: i32) -> AppResult<Option<Book>> {
        self.repository.find_by_title_and_author(title, author_id).await
    }

    pub async fn create(&self, title: &str, author_id: i32, published_at: i64) -> AppResult<Book> {
        let mut book = Book {
            id: 0,
            title: title.to_string(),
            author_id,
            published_at,
        };
        book.id = self.repository.create(&book).await?;
        tracing::info!("Created book id={} author_id={}", book.id, author_id);
        Ok(book)
    }

    pub async fn update(&self, id: i32, title: &str, author_id: i32, published_at: i64) -> AppResult<Book> {
        let mut book = self.get(id).await?;
        book.title = title.to_string();
        book.author_id = author_id;
        book.published_at = published_at;
        self.repository.update(&book).await?;
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
