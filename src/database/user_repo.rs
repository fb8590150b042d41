use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewUser, User};
use crate::database::repository::UserRepo;

const USER_COLUMNS: &str = "user_id, email, password, role, full_name, created_at, updated_at";

#[derive(Clone)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepo for PgUserRepo {
    async fn save_user(&self, user: NewUser) -> Result<User, DatabaseError> {
        let query = format!(
            "INSERT INTO users (user_id, email, password, role, full_name, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
             RETURNING {}",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&query)
            .bind(Uuid::new_v4())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.role)
            .bind(&user.full_name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                let err = DatabaseError::from_write(e, "user already exists");
                if !matches!(err, DatabaseError::Conflict(_)) {
                    tracing::error!("Failed to save user: {}", err);
                }
                err
            })
    }

    async fn find_by_email(&self, email: &str) -> Result<User, DatabaseError> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound("user not found".to_string()))
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<User, DatabaseError> {
        let query = format!("SELECT {} FROM users WHERE user_id = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound("user not found".to_string()))
    }
}
