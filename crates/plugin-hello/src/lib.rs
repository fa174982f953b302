//! Hello world plugin for ZeroMass.
//!
//! Answers every page request with a static welcome document telling the
//! developer the installation works and that this plugin should now be
//! removed. Because it claims every `answerPage` event, nothing loaded after
//! it can serve a page.

pub mod hooks;
pub mod page;
pub mod plugin;

pub use plugin::{HELLO_PLUGIN_ID, HelloPlugin};
