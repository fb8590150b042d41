pub mod auth;
pub mod request_log;
pub mod response;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use request_log::request_log_middleware;
pub use response::{ApiResponse, ApiResult, ListResponse, ListResult};
