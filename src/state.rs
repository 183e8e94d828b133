//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::domain::resolver::HostResolver;
use crate::infrastructure::persistence::PgUrlRepository;

/// Url service backed by PostgreSQL.
pub type PgUrlService = UrlService<PgUrlRepository>;

/// Process-wide state, cloned cheaply into each request.
///
/// The service holds the connection pool, initialized once at startup.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<PgUrlService>,
    pub resolver: Arc<dyn HostResolver>,
}

impl AppState {
    pub fn new(url_service: Arc<PgUrlService>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            url_service,
            resolver,
        }
    }
}
