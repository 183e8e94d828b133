//! Utility functions shared by the request path and operator tooling.
//!
//! - [`url_normalizer`] - Hostname extraction and scheme stripping

pub mod url_normalizer;
