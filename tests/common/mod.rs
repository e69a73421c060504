// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use smart_tracker::config::Config;
use smart_tracker::routes::create_router;
use smart_tracker::AppState;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Test app over a throwaway upload directory.
///
/// Keep the returned `TempDir` alive for as long as the app is used.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
    pub upload_dir: TempDir,
}

/// Create a test app with a fresh store and a temporary upload directory.
#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    create_test_app_with(|_| {})
}

/// Like `create_test_app`, with a chance to adjust the config first.
#[allow(dead_code)]
pub fn create_test_app_with(adjust: impl FnOnce(&mut Config)) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut config = Config {
        upload_dir: upload_dir.path().to_path_buf(),
        ..Config::default()
    };
    adjust(&mut config);

    let state = Arc::new(AppState::new(config));
    TestApp {
        router: create_router(state.clone()),
        state,
        upload_dir,
    }
}

impl TestApp {
    /// Send a request through a clone of the router.
    #[allow(dead_code)]
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible")
    }

    /// Send a JSON request and return status plus parsed body (`Null` if empty).
    #[allow(dead_code)]
    pub async fn json(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.send(request).await;
        let status = response.status();
        (status, read_json(response).await)
    }
}

/// Read a response body as JSON, or `Null` when empty.
#[allow(dead_code)]
pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    }
}
