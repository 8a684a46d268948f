//! API handlers for the borrow book REST endpoints

pub mod authors;
pub mod books;
pub mod borrows;
pub mod health;
pub mod openapi;
pub mod raw;

use std::time::Duration;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::IntoParams;

use crate::{config::CorsConfig, services::ListQuery, AppState};

/// Query parameters shared by every list endpoint.
///
/// `filter` and `sort` may be repeated, e.g.
/// `?filter=title__ilike__%25Go%25&filter=author_id__eq__3&sort=published_at__desc`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// `field__operator__value`; operators are eq, ilike, gt, gte, lt, lte
    #[serde(default)]
    pub filter: Vec<String>,
    /// `field__asc` or `field__desc`
    #[serde(default)]
    pub sort: Vec<String>,
    /// Comma separated list of columns to return
    #[serde(default)]
    pub fields: String,
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        Self {
            filters: params.filter,
            sorts: params.sort,
            fields: params.fields,
        }
    }
}

/// Build the application router with all routes
pub fn router(state: AppState) -> Router {
    let mut api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book).put(books::update_book).delete(books::delete_book),
        )
        // Authors
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route(
            "/authors/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        // Borrows
        .route("/borrows", get(borrows::list_borrows).post(borrows::create_borrow))
        .route(
            "/borrows/:id",
            get(borrows::get_borrow)
                .put(borrows::update_borrow)
                .delete(borrows::delete_borrow),
        );

    if state.config.server.enable_raw_query {
        tracing::warn!("Raw SQL console enabled at /api/extra-query/raw");
        api = api.route("/extra-query/raw", post(raw::execute_raw_query));
    }

    let cors = cors_layer(&state.config.cors);

    Router::new()
        .nest("/api", api.with_state(state))
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age_secs));

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    layer.allow_origin(AllowOrigin::list(valid_origins(config)))
}

fn valid_origins(config: &CorsConfig) -> Vec<HeaderValue> {
    config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect()
}
