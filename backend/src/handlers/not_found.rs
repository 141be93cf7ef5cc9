//! Fallback for unmatched API paths

use crate::error::AppError;

pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// JSON 404 for any unmatched `/api` path
pub async fn api_not_found() -> AppError {
    AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
}
