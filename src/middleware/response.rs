use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::filter::Pagination;

/// Success envelope: `{ status_code, message, data }`
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub message: String,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, Some(data))
    }

    /// Create a 201 Created response
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, Some(data))
    }

    pub fn with_status(status_code: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            data,
            message: message.into(),
            status_code,
        }
    }
}

impl ApiResponse<()> {
    /// 200 with `data: null`
    pub fn message_only(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data_value = match self.data.as_ref().map(serde_json::to_value).transpose() {
            Ok(value) => value.unwrap_or(Value::Null),
            Err(e) => return serialization_failure(e),
        };

        let envelope = json!({
            "status_code": self.status_code.as_u16(),
            "message": self.message,
            "data": data_value
        });

        (self.status_code, Json(envelope)).into_response()
    }
}

/// Paged list envelope: `{ status_code, message, data, total, page, limit }`
#[derive(Debug)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub message: String,
    pub total: i64,
    pub pagination: Pagination,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(message: impl Into<String>, data: Vec<T>, total: i64, pagination: Pagination) -> Self {
        Self {
            data,
            message: message.into(),
            total,
            pagination,
        }
    }
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => return serialization_failure(e),
        };

        let envelope = json!({
            "status_code": StatusCode::OK.as_u16(),
            "message": self.message,
            "data": data_value,
            "total": self.total,
            "page": self.pagination.page,
            "limit": self.pagination.limit
        });

        (StatusCode::OK, Json(envelope)).into_response()
    }
}

fn serialization_failure(e: serde_json::Error) -> Response {
    tracing::error!("Failed to serialize response data: {}", e);
    crate::error::ApiError::internal_server_error("Failed to serialize response data").into_response()
}

// Convenience type aliases
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
pub type ListResult<T> = Result<ListResponse<T>, crate::error::ApiError>;
