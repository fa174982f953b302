//! Hook system — registry, dispatcher, and hook definitions.

pub mod definitions;
pub mod dispatcher;
pub mod registry;

pub use definitions::{ANSWER_PAGE, HookContext, HookName, RequestInfo, ResponseSink};
pub use dispatcher::HookDispatcher;
pub use registry::{HookHandler, HookRegistry};
