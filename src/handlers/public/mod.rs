// handlers/public/mod.rs - Public handlers (no authentication required)

pub mod auth;
pub mod system;
