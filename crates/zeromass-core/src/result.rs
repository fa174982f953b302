//! Convenience result type alias for ZeroMass.

use crate::error::AppError;

/// A specialized `Result` type for ZeroMass operations.
pub type AppResult<T> = Result<T, AppError>;
