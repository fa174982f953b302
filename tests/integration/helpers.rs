//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use tower::ServiceExt;

use zeromass_plugin::manager::PluginManager;
use zeromass_plugin::registry::Plugin;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Response captured from a test request
pub struct TestResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body decoded as UTF-8
    pub body: String,
}

impl TestApp {
    /// Create a test application with the given plugins loaded in order
    pub fn with_plugins(plugins: Vec<Arc<dyn Plugin>>) -> Self {
        let mut manager = PluginManager::new();
        manager
            .load_all(plugins)
            .expect("Failed to load test plugins");

        let state = zeromass_http::AppState::new(manager.into_dispatcher());

        Self {
            router: zeromass_http::build_app(state),
        }
    }

    /// Create a test application running the stock hello plugin
    pub fn hello() -> Self {
        Self::with_plugins(vec![Arc::new(plugin_hello::HelloPlugin::new())])
    }

    /// Send a request with an empty body
    pub async fn request(&self, method: &str, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"),
        }
    }
}
