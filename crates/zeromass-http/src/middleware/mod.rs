//! Axum middleware stack.

pub mod logging;
