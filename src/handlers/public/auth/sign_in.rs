use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use serde::Deserialize;

use super::AuthPayload;
use crate::auth::{verify_password, verify_password_unknown_account};
use crate::database::DatabaseError;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /user/sign-in - Authenticate and receive a JWT
///
/// Expected Input:
/// ```json
/// { "email": "ops@example.com", "password": "secret" }
/// ```
///
/// Unknown emails and wrong passwords both answer 401 with the same message.
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> ApiResult<AuthPayload> {
    let Json(request) = payload?;

    let user = match state.users.find_by_email(request.email.trim()).await {
        Ok(user) => user,
        Err(DatabaseError::NotFound(_)) => {
            verify_password_unknown_account(&request.password);
            tracing::warn!("sign-in rejected: unknown account");
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
        Err(e) => return Err(e.into()),
    };

    if !verify_password(&request.password, &user.password) {
        tracing::warn!(user_id = %user.user_id, "sign-in rejected: wrong password");
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    tracing::info!(user_id = %user.user_id, "user signed in");
    Ok(ApiResponse::success("Signed in successfully", AuthPayload::issue(user)?))
}
