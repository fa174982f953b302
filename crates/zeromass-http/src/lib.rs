//! # zeromass-http
//!
//! HTTP host for ZeroMass built on Axum.
//!
//! There is no routing: every request becomes a hook context and is
//! dispatched to the `answerPage` hook. Whatever the handling plugin wrote
//! to the response sink is sent back; an unhandled request is a 404 and a
//! failing handler produces the generic error response.

pub mod app;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
