use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode},
};
use science_eq::{
    exam::Examiner,
    server::{self, AppState, ROUTE},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

pub const TEST_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Router backed by the given mock provider
pub fn create_test_app(llm: Arc<MockLlmClient>) -> Router {
    let examiner = Examiner::new(llm);
    server::router(AppState::new(Some(examiner), TEST_API_KEY_ENV))
}

/// Router as it runs when the credential is missing from the environment
pub fn create_unconfigured_app() -> Router {
    server::router(AppState::new(None, TEST_API_KEY_ENV))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn allow_origin(&self) -> Option<&str> {
        self.headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok())
    }

    pub fn error_message(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn post_raw(app: Router, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(ROUTE)
        .header("content-type", "application/json")
        .header("origin", "http://localhost:3000")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn post_json(app: Router, body: Value) -> TestResponse {
    post_raw(app, &body.to_string()).await
}

pub async fn preflight(app: Router, origin: &str) -> TestResponse {
    let request = Request::builder()
        .method("OPTIONS")
        .uri(ROUTE)
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}
