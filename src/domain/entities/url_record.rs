//! Url record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between an original URL and its serial short identifier.
///
/// `original_url` is kept exactly as submitted; it is never normalized.
/// Both `original_url` and `short_url` are unique across all records.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_url: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, original_url: String, short_url: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            short_url,
            created_at,
        }
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_url: i64,
}

/// Computes the next short identifier from the current maximum.
///
/// Identifiers start at 1 for an empty collection.
pub fn next_short_url(current_max: Option<i64>) -> i64 {
    current_max.map_or(1, |max| max + 1)
}
