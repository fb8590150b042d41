// handlers/protected/mod.rs - Handlers behind the JWT gate
//
// Every route in this tier is wrapped by `jwt_auth_middleware`, which injects
// an `AuthUser` extension before the handler runs.

pub mod assets; // /api/v1/network-assets/*
pub mod auth; // /user/profile
