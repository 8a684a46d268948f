//! Borrow Book Server
//!
//! A REST JSON API for a small library: authors, books and borrow records,
//! with generic filtering, sorting and field selection on every list endpoint.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod import;
pub mod logging;
pub mod models;
pub mod query;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
