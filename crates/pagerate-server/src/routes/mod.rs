//! API routes for the pagerate server.

pub mod pages;
pub mod ratings;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::USER_ID_HEADER;

/// Creates the main API router with all routes mounted.
pub fn create_router(pool: PgPool) -> Router {
    Router::new()
        .nest("/api/v1", api_v1_routes(pool))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Creates the v1 API routes.
fn api_v1_routes(pool: PgPool) -> Router {
    Router::new()
        .nest("/pages", pages::router(pool.clone()))
        .nest("/ratings", ratings::router(pool))
}

/// CORS policy for the extension: any origin, the two API methods, and the
/// identity header. Can be restricted to a specific extension id later.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)])
        .max_age(std::time::Duration::from_secs(3600))
}
