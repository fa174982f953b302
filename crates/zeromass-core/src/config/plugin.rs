//! Plugin loading configuration.

use serde::{Deserialize, Serialize};

/// Which compiled-in plugins are loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Plugin ids to load, in load order. Load order is registration order,
    /// which in turn decides dispatch order for a shared hook.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

fn default_enabled() -> Vec<String> {
    vec!["com.sergiosgc.hello".to_string()]
}
