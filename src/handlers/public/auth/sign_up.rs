use std::collections::HashMap;

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use serde::Deserialize;

use super::AuthPayload;
use crate::auth::hash_password;
use crate::database::models::user::{NewUser, DEFAULT_ROLE};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// POST /user/sign-up - Register a new account and receive a JWT
///
/// Expected Input:
/// ```json
/// { "email": "ops@example.com", "password": "secret", "full_name": "Ops Team" }
/// ```
pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> ApiResult<AuthPayload> {
    let Json(request) = payload?;

    let mut field_errors = HashMap::new();
    if request.email.trim().is_empty() {
        field_errors.insert("email".to_string(), "This field is required".to_string());
    }
    if request.password.is_empty() {
        field_errors.insert("password".to_string(), "This field is required".to_string());
    }
    if !field_errors.is_empty() {
        return Err(ApiError::validation_error("Missing required fields", Some(field_errors)));
    }

    let password_hash = hash_password(&request.password).map_err(|e| {
        tracing::error!("{}", e);
        ApiError::internal_server_error("Failed to create account")
    })?;

    let user = state
        .users
        .save_user(NewUser {
            email: request.email.trim().to_string(),
            password_hash,
            role: DEFAULT_ROLE.to_string(),
            full_name: request.full_name,
        })
        .await?;

    tracing::info!(user_id = %user.user_id, "user registered");
    Ok(ApiResponse::created("Account created successfully", AuthPayload::issue(user)?))
}
