mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use sqlx::PgPool;
use shorturl::api::handlers::{redirect_handler, shorten_handler};

fn test_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{short_url}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    common::create_test_url(&pool, "https://www.freecodecamp.org/", 1).await;
    let server = test_server(pool);

    let response = server.get("/api/shorturl/1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.freecodecamp.org/");
}

#[sqlx::test]
async fn test_redirect_round_trip_is_exact(pool: PgPool) {
    let server = test_server(pool);
    let original = "https://Example.com:8443/Some/Path?x=1&y=2#frag";

    let json = server
        .post("/api/shorturl")
        .form(&[("url", original)])
        .await
        .json::<serde_json::Value>();
    let short_url = json["short_url"].as_i64().unwrap();

    let response = server.get(&format!("/api/shorturl/{short_url}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), original);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = test_server(pool.clone());

    let response = server.get("/api/shorturl/99").await;

    response.assert_status_not_found();
    assert_eq!(
        response.text(),
        "The short URL provided doesn't exist in the database"
    );
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_redirect_non_numeric_is_not_found(pool: PgPool) {
    let server = test_server(pool);

    server.get("/api/shorturl/abc").await.assert_status_not_found();
    server.get("/api/shorturl/0").await.assert_status_not_found();
    server.get("/api/shorturl/-1").await.assert_status_not_found();
}
