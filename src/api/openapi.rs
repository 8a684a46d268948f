//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, borrows, health, raw};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Borrow Book API",
        version = "0.4.0",
        description = "Library borrowing REST API: authors, books and borrow records"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Borrows
        borrows::list_borrows,
        borrows::get_borrow,
        borrows::create_borrow,
        borrows::update_borrow,
        borrows::delete_borrow,
        // Extra
        raw::execute_raw_query,
    ),
    components(
        schemas(
            crate::models::BookRequest,
            crate::models::BookResponse,
            crate::models::AuthorRequest,
            crate::models::AuthorResponse,
            crate::models::BorrowRequest,
            crate::models::BorrowResponse,
            raw::RawQueryRequest,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog"),
        (name = "authors", description = "Authors"),
        (name = "borrows", description = "Borrow records"),
        (name = "extra", description = "Raw SQL console (disabled by default)")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
