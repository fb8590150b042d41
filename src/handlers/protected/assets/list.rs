use axum::extract::{Query, State};

use crate::database::models::AssetSummary;
use crate::filter::{AssetFilter, AssetQuery};
use crate::middleware::{ListResponse, ListResult};
use crate::state::AppState;

/// GET /api/v1/network-assets - Newest assets first, paged
pub async fn list(State(state): State<AppState>, Query(query): Query<AssetQuery>) -> ListResult<AssetSummary> {
    let pagination = query.pagination();
    let page = state.assets.search(&AssetFilter::default(), pagination).await?;

    Ok(ListResponse::new(
        "Network assets retrieved successfully",
        page.records,
        page.total,
        pagination,
    ))
}
