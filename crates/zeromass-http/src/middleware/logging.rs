//! Access log for page requests.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use crate::handlers::page::HandledBy;

/// Logs one line per request, naming the plugin that answered it.
///
/// `handled = false` with a 404 means every `answerPage` handler declined.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let plugin_id = response
        .extensions()
        .get::<HandledBy>()
        .map(|handled_by| handled_by.0.as_str());

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        handled = plugin_id.is_some(),
        plugin_id = plugin_id.unwrap_or("-"),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Page answered"
    );

    response
}
