//! Application state shared across all handlers and middleware.

use zeromass_plugin::hooks::dispatcher::HookDispatcher;

/// Shared state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dispatcher over the frozen hook registry
    pub dispatcher: HookDispatcher,
}

impl AppState {
    /// Creates the state from a finished registration phase.
    pub fn new(dispatcher: HookDispatcher) -> Self {
        Self { dispatcher }
    }
}
