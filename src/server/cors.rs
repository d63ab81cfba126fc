use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};
use reqwest::Url;

/// Used whenever the request origin is missing, malformed or not allowed.
pub const CANONICAL_ORIGIN: &str = "https://artinamr.xyz";

pub const ALLOWED_ORIGINS: &[&str] = &[
    CANONICAL_ORIGIN,
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:5500",
    "http://127.0.0.1:5500",
];

pub const ALLOWED_METHODS: &str = "POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Picks the `Access-Control-Allow-Origin` value for a request `Origin` header.
pub fn resolve_origin(origin: Option<&str>) -> &'static str {
    let Some(parsed) = origin.and_then(|o| Url::parse(o.trim()).ok()) else {
        return CANONICAL_ORIGIN;
    };

    // scheme://host[:port], default ports dropped
    let normalized = parsed.origin().ascii_serialization();

    ALLOWED_ORIGINS
        .iter()
        .copied()
        .find(|allowed| *allowed == normalized)
        .unwrap_or(CANONICAL_ORIGIN)
}

/// Stamps the resolved allow-origin on every response, errors included.
pub async fn allow_origin_middleware(req: Request, next: Next) -> Response {
    let origin = resolve_origin(
        req.headers()
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok()),
    );

    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(origin),
    );
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));

    response
}
