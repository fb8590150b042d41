// handlers/mod.rs - Two security tiers
//
// Public (no auth) → Protected (JWT auth)
pub mod protected; // Tier 2: JWT authentication required (/user/profile, /api/v1/*)
pub mod public; // Tier 1: No authentication required (/, /health, /user/sign-*)
