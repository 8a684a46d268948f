//! Borrow record service

use std::sync::Arc;

use super::ListQuery;
use crate::{
    error::{AppError, AppResult},
    models::Borrow,
    repository::BorrowRepository,
};

#[derive(Clone)]
pub struct BorrowsService {
    repository: Arc<dyn BorrowRepository>,
}

impl BorrowsService {
    pub fn new(repository: Arc<dyn BorrowRepository>) -> Self {
        Self { repository }
    }

    /// List borrow records with filters, sorts and field selection
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Borrow>> {
        let opts = query.to_options(&Borrow::SCHEMA)?;
        self.repository.list(&opts).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Borrow> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrow {} not found", id)))
    }

    pub async fn create(&self, book_id: i32, user_name: &str, borrowed_at: i64) -> AppResult<Borrow> {
        let mut borrow = Borrow {
            id: 0,
            book_id,
            user_name: Some(user_name.to_string()),
            borrowed_at,
        };
        borrow.id = self.repository.create(&borrow).await?;
        tracing::info!("Created borrow id={} book_id={}", borrow.id, book_id);
        Ok(borrow)
    }

    pub async fn update(&self, id: i32, book_id: i32, user_name: &str, borrowed_at: i64) -> AppResult<Borrow> {
        let mut borrow = self.get(id).await?;
        borrow.book_id = book_id;
        borrow.user_name = Some(user_name.to_string());
        borrow.borrowed_at = borrowed_at;
        self.repository.update(&borrow).await?;
        Ok(borrow)
    }

    /// Delete a borrow record; missing records are reported before any write
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get(id).await?;
        self.repository.delete(id).await
    }
}
