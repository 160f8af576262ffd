//! Result type alias used across all AynBeauty crates.

use crate::error::AppError;

/// Shorthand for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
