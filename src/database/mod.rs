pub mod asset_repo;
pub mod manager;
pub mod models;
pub mod query_builder;
pub mod repository;
pub mod user_repo;

pub use asset_repo::PgNetworkAssetRepo;
pub use manager::{DatabaseError, DatabaseManager};
pub use repository::{AssetPage, NetworkAssetRepo, UserRepo};
pub use user_repo::PgUserRepo;
