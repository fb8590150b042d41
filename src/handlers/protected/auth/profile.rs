use axum::extract::{Extension, State};

use crate::database::models::User;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /user/profile - Account behind the presented token
pub async fn profile(State(state): State<AppState>, Extension(auth_user): Extension<AuthUser>) -> ApiResult<User> {
    let user = state.users.find_by_id(auth_user.user_id).await?;
    Ok(ApiResponse::success("Profile retrieved successfully", user))
}
