//! # zeromass-plugin
//!
//! Plugin framework for ZeroMass. Provides:
//!
//! - Hook registry keyed by hook name, preserving registration order
//! - First-responder-wins dispatch: the first handler returning `true` wins
//! - Plugin registry and a manager that owns the registration phase
//! - Closure handlers and a `plugin_info!` macro for small plugins

pub mod hooks;
pub mod macros;
pub mod manager;
pub mod prelude;
pub mod registry;
pub mod traits;

pub use hooks::definitions::{ANSWER_PAGE, HookContext, HookName, RequestInfo, ResponseSink};
pub use hooks::dispatcher::HookDispatcher;
pub use hooks::registry::{HookHandler, HookRegistry};
pub use manager::PluginManager;
pub use registry::{Plugin, PluginInfo, PluginRegistry};
pub use traits::ClosureHandler;
