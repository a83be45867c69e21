mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::stats_list_handler;
use shortlink::domain::entities::NewClick;
use shortlink::state::AppState;

fn list_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/shorturls", get(stats_list_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_empty_registry() {
    let server = list_server(common::create_test_state());

    let response = server.get("/shorturls").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_preserves_creation_order() {
    let state = common::create_test_state();
    for (code, url) in [
        ("one111", "https://example.com/1"),
        ("two222", "https://example.com/2"),
        ("three3", "https://example.com/3"),
    ] {
        state
            .registry
            .create(url, None, Some(code.to_string()))
            .await
            .unwrap();
    }

    let server = list_server(state);

    let response = server.get("/shorturls").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["shortcode"], "one111");
    assert_eq!(items[1]["shortcode"], "two222");
    assert_eq!(items[2]["shortcode"], "three3");
    assert_eq!(items[0]["originalUrl"], "https://example.com/1");
    assert!(items[0]["expiry"].is_string());
}

#[tokio::test]
async fn test_list_reports_click_counts() {
    let state = common::create_test_state();
    state
        .registry
        .create("https://example.com", None, Some("pop001".to_string()))
        .await
        .unwrap();

    for _ in 0..2 {
        state
            .registry
            .resolve("pop001", NewClick::default())
            .await
            .unwrap();
    }

    let server = list_server(state);

    let response = server.get("/shorturls").await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap()[0]["clicks"], 2);
}

#[tokio::test]
async fn test_list_includes_expired_links() {
    let state = common::create_test_state();
    common::create_expired_link(&state, "stale5", "https://example.com").await;
    state
        .registry
        .create("https://example.com/live", None, Some("live01".to_string()))
        .await
        .unwrap();

    let server = list_server(state);

    let response = server.get("/shorturls").await;
    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["shortcode"], "stale5");
}
