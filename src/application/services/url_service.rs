//! Short URL creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};

use crate::domain::entities::{NewUrlRecord, next_short_url};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Total attempts for one create before a conflict is reported to the caller.
pub const MAX_CREATE_ATTEMPTS: usize = 5;

/// Service for assigning and resolving serial short URLs.
///
/// The next identifier is derived from the current maximum on every attempt
/// rather than kept in a counter. Two concurrent creates can pick the same
/// candidate; the store rejects the loser with a conflict and the whole
/// lookup/derive/insert sequence is retried.
pub struct UrlService<R: UrlRepository> {
    url_repository: Arc<R>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new url service.
    pub fn new(url_repository: Arc<R>) -> Self {
        Self { url_repository }
    }

    /// Returns the short URL for `original_url`, assigning a new one if needed.
    ///
    /// `original_url` is matched and stored exactly as given. Repeated calls
    /// with the same string always return the same identifier.
    ///
    /// # Retries
    ///
    /// A uniqueness conflict on insert re-runs the whole sequence, up to
    /// [`MAX_CREATE_ATTEMPTS`] attempts with a short jittered backoff. A retry
    /// that finds the URL already stored by a concurrent request returns that
    /// record's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if every attempt lost a race.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_or_create_short_url(&self, original_url: &str) -> Result<i64, AppError> {
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(5)
            .map(jitter)
            .take(MAX_CREATE_ATTEMPTS - 1);

        RetryIf::spawn(
            strategy,
            || self.find_or_insert(original_url),
            |e: &AppError| {
                let retry = e.is_conflict();
                if retry {
                    warn!(original_url, "Short URL conflict, retrying");
                }
                retry
            },
        )
        .await
        .map_err(|e| {
            if e.is_conflict() {
                AppError::conflict(
                    "Failed to allocate a unique short URL",
                    json!({ "original_url": original_url, "attempts": MAX_CREATE_ATTEMPTS }),
                )
            } else {
                e
            }
        })
    }

    /// Resolves a short URL back to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing is stored under `short_url`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, short_url: i64) -> Result<String, AppError> {
        self.url_repository
            .find_by_short_url(short_url)
            .await?
            .map(|record| record.original_url)
            .ok_or_else(|| short_url_not_found(short_url))
    }

    /// Counts stored records. Doubles as a store liveness probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.url_repository.count().await
    }

    /// One lookup/derive/insert attempt.
    async fn find_or_insert(&self, original_url: &str) -> Result<i64, AppError> {
        if let Some(existing) = self
            .url_repository
            .find_by_original_url(original_url)
            .await?
        {
            return Ok(existing.short_url);
        }

        let current_max = self.url_repository.find_max_short_url().await?;

        let record = self
            .url_repository
            .insert(NewUrlRecord {
                original_url: original_url.to_string(),
                short_url: next_short_url(current_max),
            })
            .await?;

        info!(
            original_url = %record.original_url,
            short_url = record.short_url,
            "Created short URL"
        );

        Ok(record.short_url)
    }
}

/// The error returned for an identifier that was never assigned.
pub fn short_url_not_found(short_url: impl std::fmt::Display) -> AppError {
    AppError::not_found(
        "The short URL provided doesn't exist in the database",
        json!({ "short_url": short_url.to_string() }),
    )
}
