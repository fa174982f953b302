//! ZeroMass server.
//!
//! Loads configuration, installs logging, runs the plugin registration
//! phase and serves every request through the `answerPage` hook.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use zeromass_core::config::AppConfig;
use zeromass_core::error::AppError;
use zeromass_plugin::hooks::dispatcher::HookDispatcher;
use zeromass_plugin::manager::PluginManager;
use zeromass_plugin::registry::Plugin;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("ZEROMASS_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ZeroMass v{}", env!("CARGO_PKG_VERSION"));

    let dispatcher = load_plugins(&config)?;

    zeromass_http::run_server(Arc::new(config), dispatcher).await
}

/// Registration phase: load the enabled plugins in configured order, then
/// freeze the hook registry.
fn load_plugins(config: &AppConfig) -> Result<HookDispatcher, AppError> {
    let mut manager = PluginManager::new();

    for plugin_id in &config.plugins.enabled {
        let plugin = compiled_in_plugin(plugin_id)
            .ok_or_else(|| AppError::configuration(format!("Unknown plugin '{}'", plugin_id)))?;
        manager.load_plugin(plugin)?;
    }

    if manager.plugin_registry().count() == 0 {
        tracing::warn!("No plugins enabled, every page will answer 404");
    }

    Ok(manager.into_dispatcher())
}

/// Plugins shipped with this binary, looked up by id.
fn compiled_in_plugin(plugin_id: &str) -> Option<Arc<dyn Plugin>> {
    match plugin_id {
        plugin_hello::HELLO_PLUGIN_ID => Some(Arc::new(plugin_hello::HelloPlugin::new())),
        _ => None,
    }
}
