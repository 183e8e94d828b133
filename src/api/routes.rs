//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::api::middleware::rate_limit::RateLimitLayer;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`              - Create or look up a short URL (rate limited)
/// - `GET  /shorturl/{short_url}`  - Redirect to the original URL
pub fn shorturl_routes(create_limit: RateLimitLayer) -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler).layer(create_limit))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
