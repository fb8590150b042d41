use std::sync::Arc;

use sqlx::PgPool;

use crate::database::{NetworkAssetRepo, PgNetworkAssetRepo, PgUserRepo, UserRepo};

/// Shared handler state; cloned per request
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub assets: Arc<dyn NetworkAssetRepo>,
    pub users: Arc<dyn UserRepo>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assets: Arc::new(PgNetworkAssetRepo::new(pool.clone())),
            users: Arc::new(PgUserRepo::new(pool.clone())),
            pool,
        }
    }

    pub fn with_repos(pool: PgPool, assets: Arc<dyn NetworkAssetRepo>, users: Arc<dyn UserRepo>) -> Self {
        Self { pool, assets, users }
    }
}
