//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::application::services::url_service::short_url_not_found;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short URL to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the stored original URL, byte for byte
/// - **404 Not Found** (plain text) if the identifier was never assigned or is
///   not a positive integer
///
/// # Errors
///
/// Returns 500 Internal Server Error on storage failures, or if the stored
/// URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let short_url = parse_short_url(&short_url).ok_or_else(|| short_url_not_found(&short_url))?;

    let original_url = state.url_service.resolve(short_url).await?;

    let location = HeaderValue::from_str(&original_url).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "short_url": short_url }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Parses a path segment as a strictly positive short URL.
fn parse_short_url(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_url() {
        assert_eq!(parse_short_url("1"), Some(1));
        assert_eq!(parse_short_url("42"), Some(42));
        assert_eq!(parse_short_url("0"), None);
        assert_eq!(parse_short_url("-3"), None);
        assert_eq!(parse_short_url("abc"), None);
        assert_eq!(parse_short_url("1.5"), None);
        assert_eq!(parse_short_url(""), None);
    }
}
