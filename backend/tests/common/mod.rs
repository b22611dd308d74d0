//! Common test utilities for integration tests
//!
//! Builds the full router (middleware included) around the built-in
//! catalog and drives it in-process.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use nutrition_tracker_backend::{
    config::AppConfig, routes, services::Catalog, state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a new test application with the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let state = AppState::new(test_config(), catalog);
        let app = routes::create_router(state);
        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// POST and parse the response body as JSON
    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let (status, body) = self.post(path, &body.to_string()).await;
        let json = serde_json::from_str(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: nutrition_tracker_backend::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        http: nutrition_tracker_backend::config::HttpConfig {
            request_timeout_secs: 5,
        },
        catalog: Default::default(),
    }
}
