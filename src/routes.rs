//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                        - Landing page (`views/index.html`)
//! - `GET  /health`                  - Health check
//! - `POST /api/shorturl`            - Create a short URL
//! - `GET  /api/shorturl/{short_url}` - Redirect to the original URL
//! - `/public/*`                     - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Rate limiting** - Per-IP token bucket on the create endpoint
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings in `config` are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let create_limit =
        rate_limit::layer(config.rate_limit_replenish_secs, config.rate_limit_burst)?;

    let router = Router::new()
        .route_service("/", ServeFile::new("views/index.html"))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::shorturl_routes(create_limit))
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
