//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored mapping between an original URL and its short identifier
//! - [`NewUrlRecord`] - Input for creating a record

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord, next_short_url};
