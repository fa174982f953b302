//! Hook names and the context handed to hook handlers.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use zeromass_core::error::AppError;
use zeromass_core::result::AppResult;

/// Hook fired once per incoming request to produce the page.
pub const ANSWER_PAGE: &str = "com.sergiosgc.zeromass.answerPage";

/// Name of an extension point. Never empty.
///
/// Names are opaque, namespaced strings such as
/// `com.sergiosgc.zeromass.answerPage`; the registry only compares them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HookName(String);

impl HookName {
    /// Creates a hook name, rejecting empty or whitespace-only input.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::validation("Hook name must not be empty"));
        }
        Ok(Self(name))
    }

    /// The page request hook.
    pub fn answer_page() -> Self {
        Self(ANSWER_PAGE.to_string())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for HookName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HookName {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for HookName {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HookName> for String {
    fn from(value: HookName) -> Self {
        value.0
    }
}

/// Facts about the request that triggered a dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    /// HTTP method, upper case.
    pub method: String,
    /// Request path, always starting with `/`.
    pub path: String,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
}

/// Output channel owned by the host. A handler that claims an event writes
/// its complete document here before returning `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSink {
    /// HTTP status code to answer with.
    pub status: u16,
    /// `Content-Type` header value, if set.
    pub content_type: Option<String>,
    /// UTF-8 body.
    body: String,
}

impl Default for ResponseSink {
    fn default() -> Self {
        Self {
            status: 200,
            content_type: None,
            body: String::new(),
        }
    }
}

impl ResponseSink {
    /// Appends text to the body.
    pub fn push_str(&mut self, text: &str) {
        self.body.push_str(text);
    }

    /// Sets the status code.
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Sets the content type.
    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = Some(content_type.into());
    }

    /// Returns the body written so far.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Consumes the sink and returns the body.
    pub fn into_body(self) -> String {
        self.body
    }
}

impl fmt::Write for ResponseSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.body.push_str(s);
        Ok(())
    }
}

/// Context passed to every handler in a dispatch.
///
/// Handlers signal that they handled the event only through their return
/// value. The response sink and data map are the output channel shared with
/// the host; changes made by a handler that declines are discarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookContext {
    /// Hook being dispatched. Set by the registry.
    pub hook: Option<HookName>,
    /// Plugin whose handler took the event. Set by the registry.
    pub handled_by: Option<String>,
    /// The request being answered.
    pub request: RequestInfo,
    /// Arbitrary data keyed by string.
    pub data: HashMap<String, serde_json::Value>,
    /// Output written by the handler that takes the event.
    pub response: ResponseSink,
}

impl HookContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context for a request.
    pub fn for_request(
        method: impl Into<String>,
        path: impl Into<String>,
        query: Option<String>,
    ) -> Self {
        Self {
            request: RequestInfo {
                method: method.into(),
                path: path.into(),
                query,
            },
            ..Self::default()
        }
    }

    /// Inserts a data value.
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Gets a data value by key.
    pub fn get_data(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Gets a string data value.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }
}
