// handlers/public/auth/mod.rs - Token acquisition endpoints (no authentication required)

use serde::Serialize;

use crate::auth::{generate_jwt, Claims};
use crate::database::models::User;
use crate::error::ApiError;

pub mod sign_in; // POST /user/sign-in - verify credentials and issue JWT
pub mod sign_up; // POST /user/sign-up - create account and issue JWT

pub use sign_in::sign_in;
pub use sign_up::sign_up;

/// Body of a successful sign-in or sign-up
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

impl AuthPayload {
    pub fn issue(user: User) -> Result<Self, ApiError> {
        let token = generate_jwt(&Claims::new(user.user_id, user.role.clone()))?;
        Ok(Self { user, token })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::testing::{send, test_app};

    #[tokio::test]
    async fn sign_up_then_sign_in() {
        let (app, _) = test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/user/sign-up",
            None,
            Some(json!({"email": "ops@example.com", "password": "correct horse", "full_name": "Ops Team"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["data"]["user"]["email"], "ops@example.com");
        assert_eq!(body["data"]["user"]["role"], "MEMBER");
        assert!(body["data"]["user"].get("password").is_none());
        assert!(body["data"]["token"].as_str().is_some());

        let (status, body) = send(
            &app,
            "POST",
            "/user/sign-in",
            None,
            Some(json!({"email": "ops@example.com", "password": "correct horse"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        let token = body["data"]["token"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "GET", "/user/profile", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["data"]["full_name"], "Ops Team");
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let (app, _) = test_app();
        let user = json!({"email": "dup@example.com", "password": "pw", "full_name": "Dup"});

        let (status, _) = send(&app, "POST", "/user/sign-up", None, Some(user.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = send(&app, "POST", "/user/sign-up", None, Some(user)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn sign_up_requires_email_and_password() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "POST", "/user/sign-up", None, Some(json!({"email": "x@example.com"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field_errors"]["password"], "This field is required");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let (app, _) = test_app();
        send(
            &app,
            "POST",
            "/user/sign-up",
            None,
            Some(json!({"email": "a@example.com", "password": "right", "full_name": "A"})),
        )
        .await;

        let (status_wrong, body_wrong) = send(
            &app,
            "POST",
            "/user/sign-in",
            None,
            Some(json!({"email": "a@example.com", "password": "wrong"})),
        )
        .await;
        let (status_unknown, body_unknown) = send(
            &app,
            "POST",
            "/user/sign-in",
            None,
            Some(json!({"email": "nobody@example.com", "password": "right"})),
        )
        .await;

        assert_eq!(status_wrong, StatusCode::UNAUTHORIZED);
        assert_eq!(status_unknown, StatusCode::UNAUTHORIZED);
        assert_eq!(body_wrong["message"], body_unknown["message"]);
    }
}
