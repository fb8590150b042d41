pub mod asset;
pub mod user;

pub use asset::{AssetInput, AssetRecord, AssetSummary};
pub use user::{NewUser, User};
