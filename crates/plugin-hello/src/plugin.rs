//! Hello plugin implementation — registers with the ZeroMass plugin system.

use std::sync::Arc;

use zeromass_core::result::AppResult;
use zeromass_plugin::hooks::definitions::HookName;
use zeromass_plugin::hooks::registry::HookRegistry;
use zeromass_plugin::registry::{Plugin, PluginInfo};

use crate::hooks::AnswerPageHook;

/// Plugin id, also the key used in `plugins.enabled`.
pub const HELLO_PLUGIN_ID: &str = "com.sergiosgc.hello";

/// Welcome page plugin for ZeroMass
#[derive(Debug)]
pub struct HelloPlugin {
    /// Plugin information
    info: PluginInfo,
}

impl HelloPlugin {
    /// Create a new hello plugin
    pub fn new() -> Self {
        Self {
            info: zeromass_plugin::plugin_info!(
                id: HELLO_PLUGIN_ID,
                name: "Hello World",
                version: env!("CARGO_PKG_VERSION"),
                description: "Answers every page with the installation welcome page",
                author: "sergiosgc"
            ),
        }
    }
}

impl Default for HelloPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for HelloPlugin {
    fn info(&self) -> PluginInfo {
        self.info.clone()
    }

    fn register_hooks(&self, registry: &mut HookRegistry) -> AppResult<()> {
        registry.register(HookName::answer_page(), Arc::new(AnswerPageHook::new()));

        tracing::info!("Hello hooks registered: answerPage");
        Ok(())
    }
}
