//! DTOs for the short URL creation endpoint.

use serde::{Deserialize, Serialize};

/// Error message returned for URLs whose hostname does not resolve.
pub const INVALID_URL: &str = "invalid url";

/// URL-encoded form body of `POST /api/shorturl`.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    /// The URL to shorten. A missing field is treated as an empty URL.
    #[serde(default)]
    pub url: String,
}

/// Response of `POST /api/shorturl`.
///
/// Both variants are sent with HTTP 200. Uses an untagged enum so the JSON
/// carries no discriminator field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ShortenResponse {
    Created { original_url: String, short_url: i64 },
    Invalid { error: &'static str },
}

impl ShortenResponse {
    /// Response for a URL that failed the existence check.
    pub fn invalid() -> Self {
        Self::Invalid { error: INVALID_URL }
    }
}
