//! Pagination query parameter parsing.
//!
//! Parameters arrive as raw strings so that malformed values map to a
//! `VALIDATION_ERROR` body instead of the framework's plain-text reject.

use serde::Deserialize;

use aynbeauty_core::error::AppError;
use aynbeauty_core::types::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default 1).
    pub page: Option<String>,
    /// Items per page (default 12, max 100).
    pub limit: Option<String>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`, rejecting malformed numbers.
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        build_page_request(self.page.as_deref(), self.limit.as_deref())
    }
}

/// Parses optional page/limit strings into a clamped [`PageRequest`].
pub(crate) fn build_page_request(
    page: Option<&str>,
    limit: Option<&str>,
) -> Result<PageRequest, AppError> {
    let defaults = PageRequest::default();
    let page = match non_empty(page) {
        Some(raw) => parse_i64("page", raw)?,
        None => defaults.page,
    };
    let limit = match non_empty(limit) {
        Some(raw) => parse_i64("limit", raw)?,
        None => defaults.limit,
    };
    Ok(PageRequest::new(page, limit))
}

/// Treats missing and blank parameters the same way.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

pub(crate) fn parse_i64(name: &str, raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::validation(format!("Parameter '{name}' must be a whole number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_use_defaults() {
        let request = PaginationParams::default().into_page_request().unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 12);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let params = PaginationParams {
            page: Some("0".to_string()),
            limit: Some("500".to_string()),
        };
        let request = params.into_page_request().unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 100);
    }

    #[test]
    fn malformed_page_is_rejected() {
        let params = PaginationParams {
            page: Some("two".to_string()),
            limit: None,
        };
        let err = params.into_page_request().unwrap_err();
        assert!(err.message.contains("'page'"));
    }

    #[test]
    fn blank_params_count_as_missing() {
        let params = PaginationParams {
            page: Some("".to_string()),
            limit: Some("  ".to_string()),
        };
        let request = params.into_page_request().unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 12);
    }
}
