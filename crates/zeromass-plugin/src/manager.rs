//! Plugin manager — owns the registration phase.
//!
//! Plugins are loaded one after another into a mutable [`HookRegistry`].
//! [`PluginManager::into_dispatcher`] consumes the manager, so once the
//! dispatcher exists nothing can register another handler.

use std::sync::Arc;

use tracing::{info, warn};

use zeromass_core::error::AppError;
use zeromass_core::result::AppResult;

use crate::hooks::dispatcher::HookDispatcher;
use crate::hooks::registry::HookRegistry;
use crate::registry::{Plugin, PluginInfo, PluginRegistry};

/// Loads plugins and collects their hook handlers.
#[derive(Debug, Default)]
pub struct PluginManager {
    /// Plugin registry.
    plugin_registry: PluginRegistry,
    /// Hook registry.
    hook_registry: HookRegistry,
}

impl PluginManager {
    /// Creates a new plugin manager with empty registries.
    pub fn new() -> Self {
        Self {
            plugin_registry: PluginRegistry::new(),
            hook_registry: HookRegistry::new(),
        }
    }

    /// Loads a compiled-in plugin and registers its hooks.
    ///
    /// Hooks are staged first, so a plugin that fails to register or
    /// clashes with an already loaded id leaves no handler behind.
    pub fn load_plugin(&mut self, plugin: Arc<dyn Plugin>) -> AppResult<()> {
        let info = plugin.info();
        let plugin_id = info.id.clone();

        let mut staged = HookRegistry::new();
        plugin.register_hooks(&mut staged).map_err(|e| {
            warn!(plugin_id = %plugin_id, error = %e, "Plugin hook registration failed");
            AppError::plugin(format!(
                "Plugin '{}' hook registration failed: {}",
                plugin_id, e.message
            ))
        })?;

        self.plugin_registry.register(plugin)?;
        let hooks = staged.registered_hooks().len();
        self.hook_registry.extend(staged);

        info!(
            plugin_id = %plugin_id,
            name = %info.name,
            version = %info.version,
            hooks = hooks,
            "Plugin loaded"
        );

        Ok(())
    }

    /// Loads plugins in order, stopping at the first failure.
    pub fn load_all(&mut self, plugins: Vec<Arc<dyn Plugin>>) -> AppResult<()> {
        for plugin in plugins {
            self.load_plugin(plugin)?;
        }
        Ok(())
    }

    /// Returns the hook registry.
    pub fn hook_registry(&self) -> &HookRegistry {
        &self.hook_registry
    }

    /// Returns the plugin registry.
    pub fn plugin_registry(&self) -> &PluginRegistry {
        &self.plugin_registry
    }

    /// Lists all loaded plugins in load order.
    pub fn list_plugins(&self) -> &[PluginInfo] {
        self.plugin_registry.list()
    }

    /// Ends the registration phase and returns a shareable dispatcher.
    pub fn into_dispatcher(self) -> HookDispatcher {
        info!(
            plugins = self.plugin_registry.count(),
            hooks = self.hook_registry.registered_hooks().len(),
            "Registration phase complete"
        );
        HookDispatcher::new(Arc::new(self.hook_registry))
    }
}
