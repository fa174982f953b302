//! Closure-based handlers for plugins that do not need a dedicated type.

use zeromass_core::result::AppResult;

use crate::hooks::definitions::HookContext;
use crate::hooks::registry::HookHandler;

type HandlerFn = dyn Fn(&mut HookContext) -> AppResult<bool> + Send + Sync;

/// A closure-based hook handler for quick handler creation.
pub struct ClosureHandler {
    /// Plugin ID.
    id: String,
    /// Handler function.
    handler: Box<HandlerFn>,
}

impl std::fmt::Debug for ClosureHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureHandler")
            .field("id", &self.id)
            .field("handler", &"<closure>")
            .finish()
    }
}

impl ClosureHandler {
    /// Creates a new closure-based handler.
    pub fn new<F>(plugin_id: &str, handler: F) -> Self
    where
        F: Fn(&mut HookContext) -> AppResult<bool> + Send + Sync + 'static,
    {
        Self {
            id: plugin_id.to_string(),
            handler: Box::new(handler),
        }
    }
}

impl HookHandler for ClosureHandler {
    fn handle(&self, context: &mut HookContext) -> AppResult<bool> {
        (self.handler)(context)
    }

    fn plugin_id(&self) -> &str {
        &self.id
    }
}
