//! Simplified "previous / current of total / next" pager.

use serde::Serialize;
use utoipa::ToSchema;

/// Pager that only needs the page count and the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SimplePager {
    /// Current page (1-based)
    #[schema(example = 3)]
    pub current_page: u64,

    /// Total number of pages
    #[schema(example = 20)]
    pub total_pages: u64,
}

impl SimplePager {
    pub fn new(current_page: u64, total_pages: u64) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Exactly on page 1, as reported by [`PageRange`](super::PageRange).
    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Exactly on the last page, as reported by [`PageRange`](super::PageRange).
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Nothing lies before the current page, including page 0.
    pub fn previous_disabled(&self) -> bool {
        self.current_page <= 1
    }

    /// Nothing lies after the current page, including pages past the end.
    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Page requested by "previous", or `None` when disabled.
    pub fn previous(&self) -> Option<u64> {
        if self.previous_disabled() {
            return None;
        }
        Some((self.current_page - 1).min(self.total_pages.max(1)))
    }

    /// Page requested by "next", or `None` when disabled.
    pub fn next(&self) -> Option<u64> {
        if self.next_disabled() {
            return None;
        }
        Some((self.current_page + 1).max(1))
    }

    /// "current / total" label.
    pub fn label(&self) -> String {
        format!("{} / {}", self.current_page, self.total_pages)
    }
}
