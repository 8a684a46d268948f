//! Borrow record endpoints

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
    models::{date_to_timestamp, Borrow, BorrowRequest, BorrowResponse},
};

/// List borrow records with optional filters, sorts and selected fields
#[utoipa::path(
    get,
    path = "/borrows",
    tag = "borrows",
    params(ListParams),
    responses(
        (status = 200, description = "List of borrow records", body = Vec<BorrowResponse>),
        (status = 400, description = "Invalid filter, sort or field", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_borrows(
    State(state): State<crate::AppState>,
    WithRejection(Query(params), _): WithRejection<Query<ListParams>, AppError>,
) -> AppResult<Json<Vec<BorrowResponse>>> {
    let borrows = state.services.borrows.list(&params.into()).await?;
    Ok(Json(borrows.iter().map(Borrow::to_response).collect()))
}

/// Get a borrow record by ID
#[utoipa::path(
    get,
    path = "/borrows/{id}",
    tag = "borrows",
    params(("id" = i32, Path, description = "Borrow ID")),
    responses(
        (status = 200, description = "Borrow details", body = BorrowResponse),
        (status = 404, description = "Borrow not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_borrow(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BorrowResponse>> {
    let borrow = state.services.borrows.get(id).await?;
    Ok(Json(borrow.to_response()))
}

/// Record a new borrow
#[utoipa::path(
    post,
    path = "/borrows",
    tag = "borrows",
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Borrow created", body = BorrowResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_borrow(
    State(state): State<crate::AppState>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<(StatusCode, Json<BorrowResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let borrowed_at = date_to_timestamp("borrowed_at", &request.borrowed_at)?;

    let borrow = state
        .services
        .borrows
        .create(request.book_id, &request.user_name, borrowed_at)
        .await?;
    Ok((StatusCode::CREATED, Json(borrow.to_response())))
}

/// Update a borrow record
#[utoipa::path(
    put,
    path = "/borrows/{id}",
    tag = "borrows",
    params(("id" = i32, Path, description = "Borrow ID")),
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Borrow updated", body = BorrowResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Borrow not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_borrow(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<Json<BorrowResponse>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let borrowed_at = date_to_timestamp("borrowed_at", &request.borrowed_at)?;

    let borrow = state
        .services
        .borrows
        .update(id, request.book_id, &request.user_name, borrowed_at)
        .await?;
    Ok(Json(borrow.to_response()))
}

/// Delete a borrow record
#[utoipa::path(
    delete,
    path = "/borrows/{id}",
    tag = "borrows",
    params(("id" = i32, Path, description = "Borrow ID")),
    responses(
        (status = 204, description = "Borrow deleted"),
        (status = 404, description = "Borrow not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_borrow(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.borrows.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
