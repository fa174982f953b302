//! Request handlers.

pub mod page;
