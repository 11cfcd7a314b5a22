#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use annolog_api::config::{parse_origins, ServerConfig};
use annolog_api::router::build_app_router;
use annolog_api::state::AppState;

/// A router wired to an annotation file inside a private temp directory.
///
/// The directory lives as long as the `TestApp`.
pub struct TestApp {
    pub router: Router,
    pub csv_path: PathBuf,
    _dir: TempDir,
}

/// Build a test `ServerConfig` that allows any origin and writes to `csv_path`.
pub fn test_config(csv_path: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        csv_path,
        cors_origins: parse_origins("*"),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let csv_path = dir.path().join("annotations.csv");
    build_test_app_with(test_config(csv_path), dir)
}

/// Build the application from an explicit config; `dir` is kept alive.
pub fn build_test_app_with(config: ServerConfig, dir: TempDir) -> TestApp {
    let csv_path = config.csv_path.clone();
    let state = AppState::new(config.clone());
    TestApp {
        router: build_app_router(state, &config),
        csv_path,
        _dir: dir,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    post_raw(app, uri, Some("application/json"), body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let request = builder.body(Body::from(body.into())).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read the annotation file as lines (terminators stripped).
pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
