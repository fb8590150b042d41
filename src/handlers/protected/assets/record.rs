use std::collections::HashMap;

use axum::extract::{rejection::JsonRejection, Path, State};
use axum::Json;

use crate::database::models::{AssetInput, AssetRecord};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/v1/network-assets/:name
pub async fn get(State(state): State<AppState>, Path(name): Path<String>) -> ApiResult<AssetRecord> {
    let record = state.assets.get_by_name(&name).await?;
    Ok(ApiResponse::success("Network asset retrieved successfully", record))
}

/// POST /api/v1/network-assets - `name` and `address` are required
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<AssetInput>, JsonRejection>,
) -> ApiResult<AssetRecord> {
    let Json(input) = payload?;

    let missing = input.missing_required();
    if !missing.is_empty() {
        let field_errors: HashMap<String, String> = missing
            .into_iter()
            .map(|field| (field.to_string(), "This field is required".to_string()))
            .collect();
        return Err(ApiError::validation_error("Name and Address are required", Some(field_errors)));
    }

    let record = state.assets.create(&input).await?;
    tracing::info!(name = %record.name, "network asset created");
    Ok(ApiResponse::created("Network asset created successfully", record))
}

/// PUT /api/v1/network-assets/:name - Replace every writable field; the key comes from the path
pub async fn update(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<AssetInput>, JsonRejection>,
) -> ApiResult<AssetRecord> {
    let Json(input) = payload?;
    let record = state.assets.update(&name, &input).await?;
    tracing::info!(name = %record.name, "network asset updated");
    Ok(ApiResponse::success("Network asset updated successfully", record))
}

/// DELETE /api/v1/network-assets/:name
pub async fn delete(State(state): State<AppState>, Path(name): Path<String>) -> ApiResult<()> {
    state.assets.delete(&name).await?;
    tracing::info!(%name, "network asset deleted");
    Ok(ApiResponse::message_only("Network asset deleted successfully"))
}
