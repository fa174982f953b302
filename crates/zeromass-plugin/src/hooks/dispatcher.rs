//! Hook dispatcher — the request-side handle on a frozen hook registry.
//!
//! Dispatch is first-responder-wins: handlers run in registration order and
//! the first one returning `true` ends the dispatch. Handler errors are
//! logged and handed back to the caller untouched.

use std::sync::Arc;

use tracing::{debug, warn};

use zeromass_core::result::AppResult;

use super::definitions::{ANSWER_PAGE, HookContext};
use super::registry::HookRegistry;

/// Dispatches hooks against a registry that no longer accepts registrations.
#[derive(Debug, Clone)]
pub struct HookDispatcher {
    /// Hook registry.
    registry: Arc<HookRegistry>,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(registry: Arc<HookRegistry>) -> Self {
        Self { registry }
    }

    /// Dispatches `hook` with the given context.
    pub fn dispatch(&self, hook: &str, context: &mut HookContext) -> AppResult<bool> {
        debug!(
            hook = %hook,
            handler_count = self.registry.handler_count(hook),
            "Dispatching hook"
        );

        match self.registry.dispatch(hook, context) {
            Ok(handled) => {
                if !handled {
                    debug!(hook = %hook, "Hook not handled");
                }
                Ok(handled)
            }
            Err(e) => {
                warn!(hook = %hook, error = %e, "Hook handler failed");
                Err(e)
            }
        }
    }

    /// Dispatches the page request hook.
    pub fn answer_page(&self, context: &mut HookContext) -> AppResult<bool> {
        self.dispatch(ANSWER_PAGE, context)
    }
}
