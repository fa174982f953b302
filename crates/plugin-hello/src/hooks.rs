//! Hook implementations for the hello plugin.

use zeromass_core::result::AppResult;
use zeromass_plugin::hooks::definitions::HookContext;
use zeromass_plugin::hooks::registry::HookHandler;

use crate::page::WELCOME_PAGE;
use crate::plugin::HELLO_PLUGIN_ID;

/// Hook handler for answerPage: serves the welcome page for any request
#[derive(Debug, Default)]
pub struct AnswerPageHook;

impl AnswerPageHook {
    /// Create a new answerPage hook handler
    pub fn new() -> Self {
        Self
    }
}

impl HookHandler for AnswerPageHook {
    fn handle(&self, ctx: &mut HookContext) -> AppResult<bool> {
        tracing::debug!(
            method = %ctx.request.method,
            path = %ctx.request.path,
            "Hello plugin answering page"
        );

        ctx.response.set_status(200);
        ctx.response.set_content_type("text/html; charset=utf-8");
        ctx.response.push_str(WELCOME_PAGE);

        Ok(true)
    }

    fn plugin_id(&self) -> &str {
        HELLO_PLUGIN_ID
    }
}
