//! Hook registry — plugins register handlers by hook name in load order.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use zeromass_core::result::AppResult;

use super::definitions::{HookContext, HookName};
use crate::traits::ClosureHandler;

/// Trait for hook handler implementations.
pub trait HookHandler: Send + Sync + std::fmt::Debug {
    /// Handles a hook invocation. Returns `Ok(true)` when this handler took
    /// responsibility for the event.
    fn handle(&self, context: &mut HookContext) -> AppResult<bool>;

    /// Returns the plugin ID owning this handler.
    fn plugin_id(&self) -> &str;
}

/// Registry of hook handlers organized by hook name.
///
/// Mutation requires `&mut self`, so handlers can only be added while the
/// registry is still exclusively owned by the loader. Once it is moved
/// behind an `Arc` it is read-only and shared by every request without
/// locking. Handlers are never removed.
#[derive(Debug, Default)]
pub struct HookRegistry {
    /// Hook name → handlers in registration order.
    handlers: HashMap<HookName, Vec<Arc<dyn HookHandler>>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Appends a handler to the sequence for `hook`.
    ///
    /// Registering the same handler twice yields two independent entries.
    pub fn register(&mut self, hook: HookName, handler: Arc<dyn HookHandler>) {
        let plugin_id = handler.plugin_id().to_string();
        let entries = self.handlers.entry(hook.clone()).or_default();
        entries.push(handler);

        info!(
            hook = %hook,
            plugin_id = %plugin_id,
            position = entries.len(),
            "Hook handler registered"
        );
    }

    /// Registers a closure as a handler for `hook`.
    pub fn register_fn<F>(&mut self, hook: HookName, plugin_id: &str, handler: F)
    where
        F: Fn(&mut HookContext) -> AppResult<bool> + Send + Sync + 'static,
    {
        self.register(hook, Arc::new(ClosureHandler::new(plugin_id, handler)));
    }

    /// Appends every handler of `other`, preserving its per-hook order.
    pub fn extend(&mut self, other: HookRegistry) {
        for (hook, handlers) in other.handlers {
            self.handlers.entry(hook).or_default().extend(handlers);
        }
    }

    /// Invokes the handlers for `hook` in registration order until one
    /// returns `true`.
    ///
    /// Returns `Ok(false)` when no handler is registered or none handled the
    /// event. A handler error stops the iteration and is returned as is.
    ///
    /// Every handler sees the context as the caller built it: whatever a
    /// declining or failing handler wrote to the response or data map is
    /// rolled back before the next handler runs.
    pub fn dispatch(&self, hook: &str, context: &mut HookContext) -> AppResult<bool> {
        let Some((name, handlers)) = self.handlers.get_key_value(hook) else {
            return Ok(false);
        };

        context.hook = Some(name.clone());
        context.handled_by = None;

        for handler in handlers {
            let response = context.response.clone();
            let data = context.data.clone();

            match handler.handle(context) {
                Ok(true) => {
                    debug!(
                        hook = %hook,
                        plugin_id = %handler.plugin_id(),
                        "Hook handled"
                    );
                    context.handled_by = Some(handler.plugin_id().to_string());
                    return Ok(true);
                }
                Ok(false) => {
                    context.response = response;
                    context.data = data;
                }
                Err(e) => {
                    context.response = response;
                    context.data = data;
                    return Err(e);
                }
            }
        }
        Ok(false)
    }

    /// Returns the handlers for `hook` in registration order.
    pub fn handlers(&self, hook: &str) -> &[Arc<dyn HookHandler>] {
        self.handlers
            .get(hook)
            .map(|entries| entries.as_slice())
            .unwrap_or_default()
    }

    /// Returns whether any handlers are registered for `hook`.
    pub fn has_handlers(&self, hook: &str) -> bool {
        !self.handlers(hook).is_empty()
    }

    /// Returns the number of handlers registered for `hook`.
    pub fn handler_count(&self, hook: &str) -> usize {
        self.handlers(hook).len()
    }

    /// Returns all hook names with at least one handler, sorted.
    pub fn registered_hooks(&self) -> Vec<&HookName> {
        let mut hooks: Vec<&HookName> = self.handlers.keys().collect();
        hooks.sort();
        hooks
    }

    /// Returns whether no handler is registered at all.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
