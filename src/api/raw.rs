//! Raw SQL console, mounted only when `server.enable_raw_query` is set

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::AppResult;

#[derive(Deserialize, ToSchema)]
pub struct RawQueryRequest {
    /// A row-returning SQL statement
    pub query: String,
}

/// Execute a raw SQL statement and return its rows as JSON objects
#[utoipa::path(
    post,
    path = "/extra-query/raw",
    tag = "extra",
    request_body = RawQueryRequest,
    responses(
        (status = 200, description = "Rows as JSON objects"),
        (status = 400, description = "Empty query", body = crate::error::ErrorResponse),
        (status = 500, description = "Statement failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn execute_raw_query(
    State(state): State<crate::AppState>,
    Json(request): Json<RawQueryRequest>,
) -> AppResult<Json<Vec<Value>>> {
    let rows = state.services.system.run_raw_query(&request.query).await?;
    Ok(Json(rows))
}
