//! Shared harness for router integration tests.
//!
//! Each `TestApp` owns a fresh `SQLite` file in a temp dir, the demo seed,
//! cheap password hashing and a converter stub that returns a fixed PDF.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use certdesk_axum::{CorsConfig, ServerConfig, bootstrap_with_converter, create_router};
use certdesk_core::RenderError;
use certdesk_render::HtmlToPdf;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const DEMO_PASSWORD: &str = "password123";
pub const STUB_PDF: &[u8] = b"%PDF-1.4 stub";

/// Records every conversion and answers with [`STUB_PDF`].
#[derive(Default)]
pub struct StubConverter {
    pub calls: Mutex<Vec<(String, bool)>>,
}

#[async_trait]
impl HtmlToPdf for StubConverter {
    async fn convert(&self, html: &str, landscape: bool) -> Result<Vec<u8>, RenderError> {
        self.calls
            .lock()
            .unwrap()
            .push((html.to_string(), landscape));
        Ok(STUB_PDF.to_vec())
    }
}

pub struct TestApp {
    pub router: Router,
    pub converter: Arc<StubConverter>,
    _dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> ServerConfig {
    let mut config = ServerConfig::with_defaults(TEST_SECRET)
        .with_database_path(dir.path().join("certdesk.db"))
        .with_assets_dir(dir.path().join("public"))
        .with_verify_base_url("https://certs.example.edu/verify")
        .with_demo_seed(true, DEMO_PASSWORD);
    config.auth.argon2_memory_kib = 64;
    config.auth.argon2_iterations = 1;
    config
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_cors(&CorsConfig::AllowAll).await
    }

    pub async fn spawn_with_cors(cors: &CorsConfig) -> Self {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let converter = Arc::new(StubConverter::default());
        let ctx = bootstrap_with_converter(&config, converter.clone())
            .await
            .expect("bootstrap");

        Self {
            router: create_router(ctx, cors),
            converter,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(request("GET", uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
        self.send(request("POST", uri, token, Some(body))).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
        self.send(request("PUT", uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(request("DELETE", uri, token, None)).await
    }

    /// Log in and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post(
                "/api/login",
                None,
                serde_json::json!({"email": email, "password": password}),
            )
            .await;
        assert_eq!(response.status(), 200, "login failed for {email}");
        let body = json_body(response).await;
        body["access_token"].as_str().unwrap().to_string()
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn json_body(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
