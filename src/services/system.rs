//! Readiness and raw SQL console service

use std::sync::Arc;

use serde_json::Value;

use crate::{error::AppResult, repository::SystemRepository};

#[derive(Clone)]
pub struct SystemService {
    repository: Arc<dyn SystemRepository>,
}

impl SystemService {
    pub fn new(repository: Arc<dyn SystemRepository>) -> Self {
        Self { repository }
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }

    pub async fn run_raw_query(&self, sql: &str) -> AppResult<Vec<Value>> {
        tracing::warn!("Executing raw query: {}", sql);
        self.repository.run_raw_query(sql).await
    }
}
