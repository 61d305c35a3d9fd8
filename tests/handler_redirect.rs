mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use shorturl::api::handlers::{redirect_handler, shorten_handler};

fn test_server(state: shorturl::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{short_url}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_round_trip() {
    let server = test_server(common::create_test_state());

    let submitted = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com/target?q=1" }))
        .await
        .json::<serde_json::Value>();

    let code = submitted["short_url"].as_u64().unwrap();
    let response = server.get(&format!("/api/shorturl/{code}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target?q=1");
}

#[tokio::test]
async fn test_redirect_preserves_exact_submitted_url() {
    let server = test_server(common::create_test_state());

    // No normalization: the stored string is returned byte for byte.
    server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://Example.COM/Path/" }))
        .await;

    let response = server.get("/api/shorturl/1").await;
    assert_eq!(response.header("location"), "https://Example.COM/Path/");
}

#[tokio::test]
async fn test_redirect_wrong_format() {
    let server = test_server(common::create_test_state());

    let response = server.get("/api/shorturl/abc").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Wrong format");
}

#[tokio::test]
async fn test_redirect_unknown_code() {
    let server = test_server(common::create_test_state());

    let response = server.get("/api/shorturl/9999").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "No short URL found for the given input");
}

#[tokio::test]
async fn test_wrong_format_is_distinct_from_not_found() {
    let server = test_server(common::create_test_state());

    let non_integer = server.get("/api/shorturl/12abc").await;
    let unassigned = server.get("/api/shorturl/12").await;

    assert_eq!(
        non_integer.json::<serde_json::Value>()["error"],
        "Wrong format"
    );
    assert_eq!(
        unassigned.json::<serde_json::Value>()["error"],
        "No short URL found for the given input"
    );
}
