//! Pagination error types

use thiserror::Error;

/// Errors produced by the pagination calculators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Page size of zero makes the page count undefined
    #[error("Page size must be greater than 0")]
    ZeroPageSize,
}
