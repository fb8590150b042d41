use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::database::models::AssetSummary;
use crate::error::ApiError;
use crate::filter::{AssetFilter, AssetQuery};
use crate::middleware::{ApiResponse, ApiResult, ListResponse, ListResult};
use crate::state::AppState;

/// GET /api/v1/network-assets/search - Filtered search.
///
/// Accepts `name`, `address`, `dns_host_name` (substring, case-insensitive),
/// `protocol_type`, `address_type`, `dataset_id` (exact) plus `page`/`limit`.
/// Blank or malformed filter values are ignored.
pub async fn search(State(state): State<AppState>, Query(query): Query<AssetQuery>) -> ListResult<AssetSummary> {
    let pagination = query.pagination();
    let criteria = AssetFilter::from_query(&query);
    let page = state.assets.search(&criteria, pagination).await?;

    Ok(ListResponse::new(
        "Network assets searched successfully",
        page.records,
        page.total,
        pagination,
    ))
}

/// GET /api/v1/network-assets/search-dns - Substring search on DNS host name
pub async fn search_dns(State(state): State<AppState>, Query(query): Query<AssetQuery>) -> ListResult<AssetSummary> {
    let dns_host_name = required_dns_host_name(&query)?;
    let pagination = query.pagination();
    let page = state
        .assets
        .search(&AssetFilter::by_dns_host_name(dns_host_name), pagination)
        .await?;

    Ok(ListResponse::new(
        "Network assets searched by DNS hostname successfully",
        page.records,
        page.total,
        pagination,
    ))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DnsExistence {
    pub dns_host_name: String,
    pub exists: bool,
}

/// GET /api/v1/network-assets/exists - Exact DNS host name existence check
pub async fn exists(State(state): State<AppState>, Query(query): Query<AssetQuery>) -> ApiResult<DnsExistence> {
    let dns_host_name = required_dns_host_name(&query)?;
    let exists = state.assets.exists_by_dns_host_name(&dns_host_name).await?;

    let message = if exists {
        "DNS hostname exists"
    } else {
        "DNS hostname does not exist"
    };
    Ok(ApiResponse::success(message, DnsExistence { dns_host_name, exists }))
}

fn required_dns_host_name(query: &AssetQuery) -> Result<String, ApiError> {
    query
        .dns_host_name
        .clone()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request("DNS hostname parameter is required"))
}
