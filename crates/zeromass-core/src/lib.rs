//! # zeromass-core
//!
//! Core crate for ZeroMass. Contains the configuration schema and loader,
//! and the unified error system shared by the plugin framework, the
//! plugins, and the HTTP host.
//!
//! This crate has **no** internal dependencies on other ZeroMass crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
