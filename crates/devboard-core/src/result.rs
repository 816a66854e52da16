//! Convenience result type alias for Devboard.

use crate::error::AppError;

/// A specialized `Result` type for Devboard operations.
pub type AppResult<T> = Result<T, AppError>;
