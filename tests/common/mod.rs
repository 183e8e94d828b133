#![allow(dead_code)]

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use shorturl::application::services::UrlService;
use shorturl::domain::resolver::HostResolver;
use shorturl::infrastructure::persistence::PgUrlRepository;
use shorturl::state::{AppState, PgUrlService};

/// Resolver that accepts every hostname except empty ones and the reserved
/// `.invalid` top-level domain, without touching the network.
pub struct FakeResolver;

#[async_trait]
impl HostResolver for FakeResolver {
    async fn resolves(&self, hostname: &str) -> bool {
        !hostname.is_empty() && !hostname.ends_with(".invalid")
    }
}

pub fn create_test_service(pool: PgPool) -> Arc<PgUrlService> {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    Arc::new(UrlService::new(repo))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(create_test_service(pool), Arc::new(FakeResolver))
}

pub async fn create_test_url(pool: &PgPool, original_url: &str, short_url: i64) {
    sqlx::query("INSERT INTO urls (original_url, short_url) VALUES ($1, $2)")
        .bind(original_url)
        .bind(short_url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_urls(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
