//! SSR integration tests
//!
//! These tests drive the real router: the page shell renders without a
//! browser, and the dataset and 404 routes answer as the page expects.

#![recursion_limit = "512"]
#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use server_lib::config::ServerConfig;
use server_lib::routes::router;
use std::path::PathBuf;
use tower::util::ServiceExt;

fn test_config() -> ServerConfig {
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    ServerConfig {
        site_addr: "127.0.0.1:3000".parse().unwrap(),
        site_root: workspace.join("target/site"),
        data_path: workspace.join("data/list.json"),
    }
}

fn setup_test_app() -> Router {
    router(&test_config())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// The home page must render without touching `spawn_local` on the server.
#[tokio::test]
async fn test_home_page_ssr_no_panic() {
    let (status, _) = get(setup_test_app(), "/").await;

    assert_eq!(status, StatusCode::OK, "Expected 200 OK for home page SSR");
}

#[tokio::test]
async fn test_home_page_renders_loading_state() {
    let (_, html) = get(setup_test_app(), "/").await;

    assert!(html.contains("Station Directory"), "Should contain the title");
    assert!(html.contains("id=\"search\""), "Should contain the search input");
    assert!(html.contains("Loading..."), "Server render shows the loading state");
    assert!(
        html.contains("no-results hidden"),
        "Placeholder is hidden until a search comes back empty"
    );
}

#[tokio::test]
async fn test_list_json_is_served() {
    let (status, body) = get(setup_test_app(), "/list.json").await;

    assert_eq!(status, StatusCode::OK);
    let dataset = app::loader::parse_dataset(&body).unwrap();
    assert!(!dataset.districts.is_empty());
}

#[tokio::test]
async fn test_missing_dataset_is_not_found() {
    let config = ServerConfig {
        data_path: PathBuf::from("does/not/exist.json"),
        ..test_config()
    };

    let (status, _) = get(router(&config), "/list.json").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, body) = get(setup_test_app(), "/pkg/missing.wasm").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty() || body.contains("Not Found"));
}

#[tokio::test]
async fn test_unrouted_page_is_not_found() {
    let (status, body) = get(setup_test_app(), "/districts/kollam").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404 Not Found"));
}
