use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::DatabaseManager;
use crate::state::AppState;

/// GET / - Service banner
pub async fn root() -> Json<Value> {
    Json(json!({
        "status_code": 200,
        "message": "Network Asset API",
        "data": {
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "auth": "/user/sign-up, /user/sign-in (public), /user/profile (protected)",
                "assets": "/api/v1/network-assets[/search|/search-dns|/exists|/:name] (protected)",
                "health": "/health (public)"
            }
        }
    }))
}

/// GET /health - Database liveness
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status_code": 200,
                "message": "ok",
                "data": { "timestamp": now, "database": "ok" }
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status_code": 503,
                    "message": "database unavailable",
                    "data": { "timestamp": now, "database": "unavailable" }
                })),
            )
        }
    }
}
