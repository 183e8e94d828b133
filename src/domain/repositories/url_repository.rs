//! Repository trait for url record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the collection of url records.
///
/// The store owns both uniqueness invariants: no two records share
/// `original_url` and no two records share `short_url`. Implementations must
/// enforce them atomically, since callers derive the next identifier with a
/// separate read.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by its exact, unnormalized original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Returns the highest assigned short identifier, or `None` for an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_max_short_url(&self) -> Result<Option<i64>, AppError>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if:
    /// - The original URL is already stored
    /// - The short identifier is already taken
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Lists every record ordered by short identifier.
    ///
    /// Used by operator tooling only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Rewrites the original URL of an existing record.
    ///
    /// The live service never calls this; it exists for offline data cleanup.
    /// Returns `Ok(true)` if a record was updated, `Ok(false)` if no record
    /// has `short_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if another record already holds
    /// `original_url`. Returns [`AppError::Internal`] on database errors.
    async fn update_original_url(&self, short_url: i64, original_url: &str)
    -> Result<bool, AppError>;
}
