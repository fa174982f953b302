//! Page handler: turns a request into an `answerPage` dispatch.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use zeromass_core::error::AppError;
use zeromass_plugin::hooks::definitions::{HookContext, ResponseSink};

use crate::error::ApiError;
use crate::state::AppState;

/// Content type used when the handling plugin did not set one.
const DEFAULT_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Response extension naming the plugin whose handler produced the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandledBy(pub String);

/// Any method, any path.
pub async fn answer_page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    let mut ctx = HookContext::for_request(
        method.as_str(),
        uri.path(),
        uri.query().map(str::to_string),
    );

    if !state.dispatcher.answer_page(&mut ctx)? {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let mut response = sink_into_response(ctx.response)?;
    if let Some(plugin_id) = ctx.handled_by {
        response.extensions_mut().insert(HandledBy(plugin_id));
    }

    Ok(response)
}

/// Converts what a handler wrote into an HTTP response.
fn sink_into_response(sink: ResponseSink) -> Result<Response, AppError> {
    let status = StatusCode::from_u16(sink.status)
        .map_err(|_| AppError::plugin(format!("Invalid response status {}", sink.status)))?;

    let content_type = sink
        .content_type
        .as_deref()
        .unwrap_or(DEFAULT_CONTENT_TYPE);
    let content_type = HeaderValue::from_str(content_type)
        .map_err(|e| AppError::plugin(format!("Invalid content type '{content_type}': {e}")))?;

    let mut response = Response::new(Body::from(sink.into_body()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);

    Ok(response)
}
