use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{config, SecurityConfig};
use crate::handlers;
use crate::middleware::{jwt_auth_middleware, request_log_middleware};
use crate::state::AppState;

/// Full router: public tier, JWT-gated tier, global layers
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(handlers::public::system::root))
        .route("/health", get(handlers::public::system::health))
        // Public auth routes
        .merge(auth_public_routes())
        // Protected API
        .merge(protected_routes())
        // Global middleware
        .layer(cors_layer(&config().security))
        .layer(TraceLayer::new_for_http());

    let router = if config().api.enable_request_logging {
        router.layer(middleware::from_fn(request_log_middleware))
    } else {
        router
    };

    router.with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new()
        .route("/user/sign-up", post(auth::sign_up))
        .route("/user/sign-in", post(auth::sign_in))
}

fn protected_routes() -> Router<AppState> {
    use handlers::protected::{assets, auth};

    Router::new()
        .route("/user/profile", get(auth::profile))
        .route("/api/v1/network-assets", get(assets::list).post(assets::create))
        .route("/api/v1/network-assets/search", get(assets::search))
        .route("/api/v1/network-assets/search-dns", get(assets::search_dns))
        .route("/api/v1/network-assets/exists", get(assets::exists))
        .route(
            "/api/v1/network-assets/:name",
            get(assets::get).put(assets::update).delete(assets::delete),
        )
        .route_layer(middleware::from_fn(jwt_auth_middleware))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}
