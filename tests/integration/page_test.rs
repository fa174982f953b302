//! Integration tests for serving pages through the answerPage hook.

mod helpers;

use std::sync::Arc;

use axum::http::{StatusCode, header};

use zeromass_core::error::AppError;
use zeromass_core::result::AppResult;
use zeromass_plugin::hooks::definitions::HookName;
use zeromass_plugin::hooks::registry::HookRegistry;
use zeromass_plugin::plugin_info;
use zeromass_plugin::registry::{Plugin, PluginInfo};

/// Plugin that answers only paths under its prefix.
#[derive(Debug)]
struct PrefixPlugin {
    id: &'static str,
    prefix: &'static str,
}

impl Plugin for PrefixPlugin {
    fn info(&self) -> PluginInfo {
        plugin_info!(
            id: self.id,
            name: "Prefix",
            version: "0.1.0",
            description: "Answers one path prefix",
            author: "tests"
        )
    }

    fn register_hooks(&self, hooks: &mut HookRegistry) -> AppResult<()> {
        let prefix = self.prefix;
        let id = self.id;
        hooks.register_fn(HookName::answer_page(), id, move |ctx| {
            if !ctx.request.path.starts_with(prefix) {
                return Ok(false);
            }
            ctx.response.set_content_type("text/plain");
            ctx.response.push_str(id);
            Ok(true)
        });
        Ok(())
    }
}

/// Plugin whose handler always fails.
#[derive(Debug)]
struct FailingPlugin;

impl Plugin for FailingPlugin {
    fn info(&self) -> PluginInfo {
        plugin_info!(
            id: "com.example.failing",
            name: "Failing",
            version: "0.1.0",
            description: "Always errors",
            author: "tests"
        )
    }

    fn register_hooks(&self, hooks: &mut HookRegistry) -> AppResult<()> {
        hooks.register_fn(HookName::answer_page(), "com.example.failing", |_ctx| {
            Err(AppError::plugin("render failed"))
        });
        Ok(())
    }
}

#[tokio::test]
async fn test_hello_answers_root() {
    let app = helpers::TestApp::hello();

    let response = app.request("GET", "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert!(response.body.starts_with("<!DOCTYPE html>"));
    assert!(response.body.contains("<title>ZeroMass is working</title>"));
}

#[tokio::test]
async fn test_hello_answers_every_page() {
    let app = helpers::TestApp::hello();

    for (method, uri) in [("GET", "/blog/2024?debugHooks"), ("POST", "/login")] {
        let response = app.request(method, uri).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.starts_with("<!DOCTYPE html>"));
    }
}

#[tokio::test]
async fn test_no_plugins_answers_not_found() {
    let app = helpers::TestApp::with_plugins(Vec::new());

    let response = app.request("GET", "/").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_first_matching_plugin_answers() {
    let app = helpers::TestApp::with_plugins(vec![
        Arc::new(PrefixPlugin {
            id: "com.example.blog",
            prefix: "/blog",
        }),
        Arc::new(PrefixPlugin {
            id: "com.example.catchall",
            prefix: "/",
        }),
    ]);

    let blog = app.request("GET", "/blog/post").await;
    assert_eq!(blog.status, StatusCode::OK);
    assert_eq!(blog.body, "com.example.blog");

    let other = app.request("GET", "/about").await;
    assert_eq!(other.status, StatusCode::OK);
    assert_eq!(other.body, "com.example.catchall");
}

#[tokio::test]
async fn test_failing_handler_is_server_error() {
    let app = helpers::TestApp::with_plugins(vec![Arc::new(FailingPlugin)]);

    let response = app.request("GET", "/").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["error"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_handler_before_failure_wins() {
    let app = helpers::TestApp::with_plugins(vec![
        Arc::new(PrefixPlugin {
            id: "com.example.catchall",
            prefix: "/",
        }),
        Arc::new(FailingPlugin),
    ]);

    let response = app.request("GET", "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "com.example.catchall");
}
