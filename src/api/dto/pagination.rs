//! Pagination query parameters and response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::PaginationConfig;
use crate::error::{AppError, AppResult};
use crate::pagination::{PageRange, PaginationError, SimplePager, compute_page_range};

fn default_current_page() -> u64 {
    1
}

/// Query parameters for the range and bar endpoints.
///
/// `page_size` and `sibling_count` fall back to the configured defaults.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct RangeQuery {
    /// Total number of records
    #[param(example = 200)]
    pub total_count: u64,

    /// Records per page
    #[validate(range(min = 1, message = "page_size must be at least 1"))]
    #[param(minimum = 1, example = 10)]
    pub page_size: Option<u64>,

    /// Current page (1-based)
    #[serde(default = "default_current_page")]
    #[param(example = 10)]
    pub current_page: u64,

    /// Pages shown on each side of the current page
    #[param(example = 1)]
    pub sibling_count: Option<u64>,
}

impl RangeQuery {
    pub fn resolve(&self, limits: &PaginationConfig) -> AppResult<PageRangeRequest> {
        PageRangeRequest::resolve(
            self.total_count,
            self.page_size,
            self.current_page,
            self.sibling_count,
            limits,
        )
    }
}

/// Query parameters for the simple pager endpoint.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SimpleQuery {
    /// Total number of pages
    #[param(example = 20)]
    pub total_pages: u64,

    /// Current page (1-based)
    #[serde(default = "default_current_page")]
    #[param(example = 3)]
    pub current_page: u64,
}

/// A range request with defaults filled in and limits checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRangeRequest {
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub sibling_count: u64,
}

impl PageRangeRequest {
    /// Fill in configured defaults and enforce configured maxima.
    pub fn resolve(
        total_count: u64,
        page_size: Option<u64>,
        current_page: u64,
        sibling_count: Option<u64>,
        limits: &PaginationConfig,
    ) -> AppResult<Self> {
        let page_size = page_size.unwrap_or(limits.default_page_size);
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize.into());
        }
        if page_size > limits.max_page_size {
            return Err(AppError::Validation {
                field: "page_size".to_string(),
                reason: format!("page_size must be at most {}", limits.max_page_size),
            });
        }

        let sibling_count = sibling_count.unwrap_or(limits.default_sibling_count);
        if sibling_count > limits.max_sibling_count {
            return Err(AppError::Validation {
                field: "sibling_count".to_string(),
                reason: format!("sibling_count must be at most {}", limits.max_sibling_count),
            });
        }

        Ok(Self {
            total_count,
            page_size,
            current_page,
            sibling_count,
        })
    }

    pub fn compute(&self) -> AppResult<PageRange> {
        Ok(compute_page_range(
            self.total_count,
            self.page_size,
            self.current_page,
            self.sibling_count,
        )?)
    }
}

/// Simple pager state with its navigation targets.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "current_page": 3,
    "total_pages": 20,
    "is_first_page": false,
    "is_last_page": false,
    "previous_disabled": false,
    "next_disabled": false,
    "previous": 2,
    "next": 4,
    "label": "3 / 20"
}))]
pub struct SimplePagerResponse {
    pub current_page: u64,
    pub total_pages: u64,
    /// Exactly on page 1, same as the range endpoint
    pub is_first_page: bool,
    /// Exactly on the last page, same as the range endpoint
    pub is_last_page: bool,
    /// "previous" has nowhere to go, also true for page 0
    pub previous_disabled: bool,
    /// "next" has nowhere to go, also true past the last page
    pub next_disabled: bool,
    /// Target of the "previous" control, absent when disabled
    pub previous: Option<u64>,
    /// Target of the "next" control, absent when disabled
    pub next: Option<u64>,
    pub label: String,
}

impl From<SimplePager> for SimplePagerResponse {
    fn from(pager: SimplePager) -> Self {
        Self {
            current_page: pager.current_page,
            total_pages: pager.total_pages,
            is_first_page: pager.is_first_page(),
            is_last_page: pager.is_last_page(),
            previous_disabled: pager.previous_disabled(),
            next_disabled: pager.next_disabled(),
            previous: pager.previous(),
            next: pager.next(),
            label: pager.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> PaginationConfig {
        PaginationConfig::default()
    }

    #[test]
    fn test_resolve_applies_defaults() {
        let request = PageRangeRequest::resolve(95, None, 3, None, &limits()).unwrap();
        assert_eq!(
            request,
            PageRangeRequest {
                total_count: 95,
                page_size: 10,
                current_page: 3,
                sibling_count: 1,
            }
        );
    }

    #[test]
    fn test_resolve_rejects_page_size_above_max() {
        let result = PageRangeRequest::resolve(95, Some(101), 1, None, &limits());
        assert!(matches!(
            result,
            Err(AppError::Validation { ref field, .. }) if field == "page_size"
        ));
    }

    #[test]
    fn test_resolve_rejects_zero_page_size() {
        let result = PageRangeRequest::resolve(95, Some(0), 1, None, &limits());
        assert!(matches!(
            result,
            Err(AppError::Validation { ref field, .. }) if field == "page_size"
        ));
    }

    #[test]
    fn test_resolve_rejects_sibling_count_above_max() {
        let result = PageRangeRequest::resolve(95, None, 1, Some(6), &limits());
        assert!(matches!(
            result,
            Err(AppError::Validation { ref field, .. }) if field == "sibling_count"
        ));
    }

    #[test]
    fn test_compute_uses_resolved_values() {
        let range = PageRangeRequest::resolve(200, None, 10, None, &limits())
            .unwrap()
            .compute()
            .unwrap();
        assert_eq!(range.total_pages, 20);
        assert_eq!(range.items.len(), 7);
    }

    #[test]
    fn test_simple_pager_response_on_last_page() {
        let response = SimplePagerResponse::from(SimplePager::new(20, 20));
        assert!(response.is_last_page);
        assert_eq!(response.previous, Some(19));
        assert_eq!(response.next, None);
        assert_eq!(response.label, "20 / 20");
    }

    #[test]
    fn test_simple_pager_response_before_first_page() {
        let response = SimplePagerResponse::from(SimplePager::new(0, 5));
        assert!(!response.is_first_page);
        assert!(response.previous_disabled);
        assert!(!response.next_disabled);
        assert_eq!(response.previous, None);
        assert_eq!(response.next, Some(1));
    }
}
