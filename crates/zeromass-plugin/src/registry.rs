//! Plugin registry — stores loaded plugin instances and metadata.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use zeromass_core::error::AppError;
use zeromass_core::result::AppResult;

use crate::hooks::registry::HookRegistry;

/// Metadata about a loaded plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin identifier, e.g. `com.sergiosgc.hello`.
    pub id: String,
    /// Human-readable plugin name.
    pub name: String,
    /// Plugin version string.
    pub version: String,
    /// Plugin description.
    pub description: String,
    /// Author or maintainer.
    pub author: String,
}

/// Trait that all plugins must implement.
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Returns plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Registers this plugin's handlers. Called once, at load time.
    fn register_hooks(&self, hooks: &mut HookRegistry) -> AppResult<()>;
}

/// Registry of all loaded plugins, in load order.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    /// Plugin ID → plugin instance.
    plugins: HashMap<String, Arc<dyn Plugin>>,
    /// Metadata in load order.
    metadata: Vec<PluginInfo>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
            metadata: Vec::new(),
        }
    }

    /// Registers a plugin. Fails if a plugin with the same id is present.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> AppResult<()> {
        let info = plugin.info();

        if self.plugins.contains_key(&info.id) {
            return Err(AppError::conflict(format!(
                "Plugin '{}' is already registered",
                info.id
            )));
        }

        info!(plugin_id = %info.id, name = %info.name, version = %info.version, "Registering plugin");

        self.plugins.insert(info.id.clone(), plugin);
        self.metadata.push(info);

        Ok(())
    }

    /// Lists plugin metadata in load order.
    pub fn list(&self) -> &[PluginInfo] {
        &self.metadata
    }

    /// Returns plugin count.
    pub fn count(&self) -> usize {
        self.plugins.len()
    }

    /// Checks whether a plugin is registered.
    pub fn contains(&self, plugin_id: &str) -> bool {
        self.plugins.contains_key(plugin_id)
    }
}
