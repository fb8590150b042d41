use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{AssetInput, AssetRecord, AssetSummary, NewUser, User};
use crate::filter::{AssetFilter, Pagination};

/// One page of matches plus the total over the same predicates
#[derive(Debug, Clone, Serialize)]
pub struct AssetPage {
    pub records: Vec<AssetSummary>,
    pub total: i64,
}

#[async_trait]
pub trait NetworkAssetRepo: Send + Sync {
    /// Page of assets matching `criteria`, newest first, with the unpaged match count
    async fn search(&self, criteria: &AssetFilter, page: Pagination) -> Result<AssetPage, DatabaseError>;

    async fn get_by_name(&self, name: &str) -> Result<AssetRecord, DatabaseError>;

    async fn create(&self, input: &AssetInput) -> Result<AssetRecord, DatabaseError>;

    /// Overwrite every writable field of the asset keyed by `name`
    async fn update(&self, name: &str, input: &AssetInput) -> Result<AssetRecord, DatabaseError>;

    async fn delete(&self, name: &str) -> Result<(), DatabaseError>;

    /// Exact (case-sensitive) DNS host name lookup
    async fn exists_by_dns_host_name(&self, dns_host_name: &str) -> Result<bool, DatabaseError>;
}

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn save_user(&self, user: NewUser) -> Result<User, DatabaseError>;

    async fn find_by_email(&self, email: &str) -> Result<User, DatabaseError>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<User, DatabaseError>;
}
