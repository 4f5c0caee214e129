//! Test helpers for the path decomposition middleware
//!
//! These tests use `oneshot()` for fast, in-process testing without network I/O.
//!
//! - Configuration helpers: `create_base_config()`, `create_config_with_toml()`
//! - Router helpers: `echo_router()`
//! - Request and response helpers: `get_request()`, `get_body_json()`, `get_body_string()`

use crate::{Config, PathInfo, PathInfoLayer};
use axum::{Json, Router, body::Body, http::Request, response::Response};


// ============================================================================
// Configuration Helpers
// ============================================================================

/// Base TOML configuration for tests: a localized site with data routes
/// deployed under "/site".
const BASE_CONFIG_TOML: &str = r#"
[pathname]
base_path = "/site"
parse_data = true

[pathname.i18n]
locales = ["en-US", "de", "fr"]
default_locale = "en-US"

[logging]
format = "json"
"#;

pub(crate) fn create_base_config() -> Config {
    BASE_CONFIG_TOML
        .parse()
        .expect("Failed to parse test config TOML")
}

/// Creates a test configuration from a `[pathname]` body.
pub(crate) fn create_config_with_toml(pathname_toml: &str) -> Config {
    let toml_str = format!(
        r#"
[pathname]
{pathname_toml}

[logging]
format = "json"
        "#
    );

    toml_str.parse().expect("Failed to parse test config TOML")
}

// ============================================================================
// Router Helpers
// ============================================================================

/// Echoes the extracted `PathInfo` back as JSON.
pub(crate) async fn echo_path_info(info: PathInfo) -> Json<PathInfo> {
    Json(info)
}

/// A router answering every path with its `PathInfo`, behind `layer`.
pub(crate) fn echo_router(layer: PathInfoLayer) -> Router {
    Router::new().fallback(echo_path_info).layer(layer)
}

// ============================================================================
// Request and Response Helpers
// ============================================================================

pub(crate) fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub(crate) async fn get_body_string(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn get_body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).expect("response body should be JSON")
}
