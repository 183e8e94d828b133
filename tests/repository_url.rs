mod common;

use sqlx::PgPool;
use std::sync::Arc;
use shorturl::domain::entities::NewUrlRecord;
use shorturl::domain::repositories::UrlRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgUrlRepository;

fn new_record(original_url: &str, short_url: i64) -> NewUrlRecord {
    NewUrlRecord {
        original_url: original_url.to_string(),
        short_url,
    }
}

#[sqlx::test]
async fn test_insert(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.insert(new_record("https://example.com", 1)).await;

    assert!(result.is_ok());
    let record = result.unwrap();
    assert_eq!(record.original_url, "https://example.com");
    assert_eq!(record.short_url, 1);
}

#[sqlx::test]
async fn test_insert_duplicate_original_url_conflicts(pool: PgPool) {
    common::create_test_url(&pool, "https://example.com", 1).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.insert(new_record("https://example.com", 2)).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_insert_duplicate_short_url_conflicts(pool: PgPool) {
    common::create_test_url(&pool, "https://example.com", 1).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.insert(new_record("https://other.example.com", 1)).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_insert_non_positive_short_url_fails(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.insert(new_record("https://example.com", 0)).await;

    assert!(matches!(result, Err(AppError::Internal { .. })));
}

#[sqlx::test]
async fn test_find_by_original_url(pool: PgPool) {
    common::create_test_url(&pool, "https://unique-url.com", 7).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let found = repo.find_by_original_url("https://unique-url.com").await.unwrap();
    assert_eq!(found.unwrap().short_url, 7);

    // Lookup is exact; no normalization happens in the store.
    let missing = repo.find_by_original_url("https://unique-url.com/").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_find_by_short_url(pool: PgPool) {
    common::create_test_url(&pool, "https://example.com/target", 3).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let found = repo.find_by_short_url(3).await.unwrap();
    assert_eq!(found.unwrap().original_url, "https://example.com/target");

    let missing = repo.find_by_short_url(4).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_find_max_short_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.find_max_short_url().await.unwrap(), None);

    common::create_test_url(&pool, "https://a.example.com", 2).await;
    common::create_test_url(&pool, "https://b.example.com", 9).await;
    common::create_test_url(&pool, "https://c.example.com", 5).await;

    assert_eq!(repo.find_max_short_url().await.unwrap(), Some(9));
}

#[sqlx::test]
async fn test_list_all_and_count(pool: PgPool) {
    common::create_test_url(&pool, "https://b.example.com", 2).await;
    common::create_test_url(&pool, "https://a.example.com", 1).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let records = repo.list_all().await.unwrap();
    let short_urls: Vec<i64> = records.iter().map(|r| r.short_url).collect();

    assert_eq!(short_urls, vec![1, 2]);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_update_original_url(pool: PgPool) {
    common::create_test_url(&pool, "https://www.example.com/a", 1).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.update_original_url(1, "www.example.com/a").await.unwrap());
    assert!(!repo.update_original_url(2, "www.example.com/b").await.unwrap());

    let record = repo.find_by_short_url(1).await.unwrap().unwrap();
    assert_eq!(record.original_url, "www.example.com/a");
}

#[sqlx::test]
async fn test_update_original_url_conflict(pool: PgPool) {
    common::create_test_url(&pool, "www.example.com", 1).await;
    common::create_test_url(&pool, "https://www.example.com", 2).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.update_original_url(2, "www.example.com").await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));

    let untouched = repo.find_by_short_url(2).await.unwrap().unwrap();
    assert_eq!(untouched.original_url, "https://www.example.com");
}
