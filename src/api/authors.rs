//! Author endpoints

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
    models::{Author, AuthorRequest, AuthorResponse},
};

/// List authors with optional filters, sorts and selected fields
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    params(ListParams),
    responses(
        (status = 200, description = "List of authors", body = Vec<AuthorResponse>),
        (status = 400, description = "Invalid filter, sort or field", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    WithRejection(Query(params), _): WithRejection<Query<ListParams>, AppError>,
) -> AppResult<Json<Vec<AuthorResponse>>> {
    let authors = state.services.authors.list(&params.into()).await?;
    Ok(Json(authors.iter().map(Author::to_response).collect()))
}

/// Get an author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AuthorResponse>> {
    let author = state.services.authors.get(id).await?;
    Ok(Json(author.to_response()))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = AuthorRequest,
    responses(
        (status = 201, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(request): Json<AuthorRequest>,
) -> AppResult<(StatusCode, Json<AuthorResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let author = state.services.authors.create(&request.name).await?;
    Ok((StatusCode::CREATED, Json(author.to_response())))
}

/// Update an existing author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = AuthorRequest,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<AuthorRequest>,
) -> AppResult<Json<AuthorResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let author = state.services.authors.update(id, &request.name).await?;
    Ok(Json(author.to_response()))
}

/// Delete an author and, through the foreign key, their books
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
