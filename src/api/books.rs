//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::{Query, WithRejection};
use validator::Validate;

use super::ListParams;
use crate::{
    error::{AppError, AppResult},
    models::{date_to_timestamp, Book, BookRequest, BookResponse},
};

/// List books with optional filters, sorts and selected fields
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(ListParams),
    responses(
        (status = 200, description = "List of books", body = Vec<BookResponse>),
        (status = 400, description = "Invalid filter, sort or field", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    WithRejection(Query(params), _): WithRejection<Query<ListParams>, AppError>,
) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.services.books.list(&params.into()).await?;
    Ok(Json(books.iter().map(Book::to_response).collect()))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.get(id).await?;
    Ok(Json(book.to_response()))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let published_at = date_to_timestamp("published_at", &request.published_at)?;

    let book = state
        .services
        .books
        .create(&request.title, request.author_id, published_at)
        .await?;
    Ok((StatusCode::CREATED, Json(book.to_response())))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<BookRequest>,
) -> AppResult<Json<BookResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let published_at = date_to_timestamp("published_at", &request.published_at)?;

    let book = state
        .services
        .books
        .update(id, &request.title, request.author_id, published_at)
        .await?;
    Ok(Json(book.to_response()))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
