//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and operator tooling.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short URL assignment and resolution

pub mod services;
