//! Integration tests for the Ratannam Gold storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ratannam-integration-tests
//! ```
//!
//! No external services are needed: every test builds its own stores with
//! zero latency and drives the axum router in-process.
//!
//! # Test Categories
//!
//! - `cms_scenarios` - Store behavior through the `CmsApi` facade
//! - `public_api` - Public JSON endpoints
//! - `admin_api` - Admin JSON endpoints
//! - `catalog_file` - JSON-file catalog persistence

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use ratannam_storefront::{
    api::CmsApi,
    config::{LatencyConfig, StorefrontConfig},
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Configuration with defaults everywhere and no simulated latency.
///
/// # Panics
///
/// Panics if the default configuration fails to parse.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    let mut config = StorefrontConfig::from_lookup(|_| None).expect("default config");
    config.latency = LatencyConfig::none();
    config
}

/// Seeded facade with no simulated latency.
#[must_use]
pub fn test_api() -> CmsApi {
    CmsApi::seeded(LatencyConfig::none())
}

/// Router over freshly seeded stores.
#[must_use]
pub fn test_app() -> Router {
    ratannam_storefront::app(AppState::with_api(test_config(), test_api()))
}

/// Send one request through `app` and decode the JSON response body.
///
/// Empty bodies decode as `Value::Null` and plain-text bodies as a string.
///
/// # Panics
///
/// Panics if the request cannot be built.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

/// `GET uri`, decoded.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Collect a string field from each element of a JSON array.
#[must_use]
pub fn field(list: &Value, name: &str) -> Vec<String> {
    list.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get(name).and_then(Value::as_str).map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
