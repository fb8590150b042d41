use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Sparse search criteria for the asset table.
///
/// Empty strings and non-positive dataset ids mean "no predicate".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_host_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<i32>,
}

impl AssetFilter {
    pub fn by_dns_host_name(value: impl Into<String>) -> Self {
        Self {
            dns_host_name: Some(value.into()),
            ..Default::default()
        }
    }

    /// Build criteria from raw query-string values, dropping anything blank or unparseable
    pub fn from_query(query: &AssetQuery) -> Self {
        Self {
            name: non_empty(&query.name),
            address: non_empty(&query.address),
            protocol_type: non_empty(&query.protocol_type),
            address_type: non_empty(&query.address_type),
            dns_host_name: non_empty(&query.dns_host_name),
            dataset_id: query
                .dataset_id
                .as_deref()
                .and_then(|s| s.trim().parse::<i32>().ok())
                .filter(|id| *id > 0),
        }
    }
}

/// Query-string shape shared by the list and search endpoints.
///
/// Everything arrives as text so that malformed numbers degrade to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetQuery {
    pub name: Option<String>,
    pub address: Option<String>,
    pub protocol_type: Option<String>,
    pub address_type: Option<String>,
    pub dns_host_name: Option<String>,
    pub dataset_id: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl AssetQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::normalize(parse_int(&self.page), parse_int(&self.limit))
    }
}

/// Normalized pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn normalize(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => p,
            _ => DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(l) if l > 0 => l.min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        };
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::normalize(None, None)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn parse_int(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(|s| s.trim().parse::<i64>().ok())
}
