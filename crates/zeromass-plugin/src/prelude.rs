//! Prelude for convenient imports.

pub use zeromass_core::error::AppError;
pub use zeromass_core::result::AppResult;

pub use crate::hooks::definitions::{ANSWER_PAGE, HookContext, HookName, ResponseSink};
pub use crate::hooks::registry::{HookHandler, HookRegistry};
pub use crate::registry::{Plugin, PluginInfo};
pub use crate::traits::ClosureHandler;

pub use crate::plugin_info;
