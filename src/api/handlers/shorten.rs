//! Handler for short URL creation endpoint.

use axum::{Form, Json, extract::State};
use tracing::debug;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::normalize_hostname;

/// Creates, or returns the existing, short URL for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Flow
///
/// 1. Reduce the submitted URL to its hostname
/// 2. Check that the hostname resolves; stop with `invalid url` if not
/// 3. Look up or assign a short URL for the submitted URL, unnormalized
///
/// # Request Body
///
/// URL-encoded: `url=https://www.freecodecamp.org/`
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org/", "short_url": 1 }
/// ```
///
/// or, for a hostname that does not resolve, still with 200 OK:
///
/// ```json
/// { "error": "invalid url" }
/// ```
///
/// # Errors
///
/// Returns 409 Conflict if a short URL could not be allocated after retries.
/// Returns 500 Internal Server Error on storage failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Json<ShortenResponse>, AppError> {
    let hostname = normalize_hostname(&form.url);

    if !state.resolver.resolves(&hostname).await {
        debug!(url = %form.url, %hostname, "Rejected URL with unresolvable hostname");
        return Ok(Json(ShortenResponse::invalid()));
    }

    let short_url = state
        .url_service
        .get_or_create_short_url(&form.url)
        .await?;

    Ok(Json(ShortenResponse::Created {
        original_url: form.url,
        short_url,
    }))
}
