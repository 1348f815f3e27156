//! Compact page-range computation for pagination controls.
//!
//! Given the total number of items, the page size, the current page and a
//! sibling count, [`compute_page_range`] produces the ordered sequence of
//! page numbers and ellipsis markers a pagination bar renders. The first and
//! last pages are always visible once the range is too long to show in full.

use serde::{Serialize, Serializer};
use utoipa::ToSchema;

use super::error::PaginationError;
use super::page::total_pages;

/// Number of pages shown on each side of the current page when the caller
/// does not ask for anything else.
pub const DEFAULT_SIBLING_COUNT: u64 = 1;

/// Marker used for elided runs of pages in serialized and rendered output.
pub const ELLIPSIS: &str = "...";

/// First page, last page, current page and two ellipsis slots.
const FIXED_SLOTS: u64 = 5;

/// A single element of a pagination range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    /// A 1-based page number.
    Page(u64),
    /// An elided run of pages.
    Ellipsis,
}

impl PageItem {
    /// Returns the page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<u64> {
        match self {
            PageItem::Page(number) => Some(*number),
            PageItem::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageItem::Ellipsis)
    }
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(number) => serializer.serialize_u64(*number),
            PageItem::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Result of a page-range computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageRange {
    /// Page numbers and `"..."` markers, left to right
    #[schema(value_type = Vec<Object>, example = json!([1, "...", 9, 10, 11, "...", 20]))]
    pub items: Vec<PageItem>,

    /// Total number of pages
    #[schema(example = 20)]
    pub total_pages: u64,

    /// The page the range was computed for
    #[schema(example = 10)]
    pub current_page: u64,

    /// Whether `current_page` is the first page
    #[schema(example = false)]
    pub is_first_page: bool,

    /// Whether `current_page` is the last page
    #[schema(example = false)]
    pub is_last_page: bool,
}

impl PageRange {
    /// Number of ellipsis markers in the range.
    pub fn ellipsis_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_ellipsis()).count()
    }

    /// Page numbers in the range, ellipses skipped.
    pub fn pages(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().filter_map(PageItem::page)
    }

    /// Whether `page` is shown as a number in the range.
    pub fn contains(&self, page: u64) -> bool {
        self.pages().any(|p| p == page)
    }
}

/// Computes the compact page range for a pagination control.
///
/// `current_page` is 1-based and is not clamped: values outside
/// `1..=total_pages` still produce a best-effort range. Only the sibling
/// window around it is clamped to the valid pages.
///
/// # Errors
///
/// Returns [`PaginationError::ZeroPageSize`] when `page_size` is zero.
///
/// # Example
///
/// ```
/// use pager_rs::pagination::{PageItem, compute_page_range};
///
/// let range = compute_page_range(200, 10, 10, 1).unwrap();
/// assert_eq!(range.total_pages, 20);
/// assert_eq!(
///     range.items,
///     vec![
///         PageItem::Page(1),
///         PageItem::Ellipsis,
///         PageItem::Page(9),
///         PageItem::Page(10),
///         PageItem::Page(11),
///         PageItem::Ellipsis,
///         PageItem::Page(20),
///     ]
/// );
/// ```
pub fn compute_page_range(
    total_count: u64,
    page_size: u64,
    current_page: u64,
    sibling_count: u64,
) -> Result<PageRange, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::ZeroPageSize);
    }

    let total_pages = total_pages(total_count, page_size);
    let items = page_items(total_pages, current_page, sibling_count);

    Ok(PageRange {
        items,
        total_pages,
        current_page,
        is_first_page: current_page == 1,
        is_last_page: current_page == total_pages,
    })
}

fn page_items(total_pages: u64, current_page: u64, sibling_count: u64) -> Vec<PageItem> {
    if total_pages <= sibling_count.saturating_add(FIXED_SLOTS) {
        return pages(1, total_pages).collect();
    }

    // total_pages > FIXED_SLOTS from here on, so the subtractions below are safe.
    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page.saturating_add(sibling_count).min(total_pages);
    let show_left_ellipsis = left_sibling > 2;
    let show_right_ellipsis = right_sibling < total_pages - 2;

    // Edge block shown next to a single ellipsis. It must leave at least one
    // hidden page, otherwise the ellipsis would stand for nothing.
    let edge_count = sibling_count.saturating_mul(2).saturating_add(3);
    let edge_fits = edge_count < total_pages - 1;

    match (show_left_ellipsis, show_right_ellipsis) {
        (false, true) if edge_fits => pages(1, edge_count)
            .chain([PageItem::Ellipsis, PageItem::Page(total_pages)])
            .collect(),
        (true, false) if edge_fits => [PageItem::Page(1), PageItem::Ellipsis]
            .into_iter()
            .chain(pages(total_pages - edge_count + 1, total_pages))
            .collect(),
        (true, true) => [PageItem::Page(1), PageItem::Ellipsis]
            .into_iter()
            .chain(pages(left_sibling, right_sibling))
            .chain([PageItem::Ellipsis, PageItem::Page(total_pages)])
            .collect(),
        // Every gap is at most one page wide: show everything.
        _ => pages(1, total_pages).collect(),
    }
}

fn pages(start: u64, end: u64) -> impl Iterator<Item = PageItem> {
    (start..=end).map(PageItem::Page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use super::PageItem::{Ellipsis as E, Page as P};

    fn items(total_count: u64, page_size: u64, current: u64, siblings: u64) -> Vec<PageItem> {
        compute_page_range(total_count, page_size, current, siblings)
            .unwrap()
            .items
    }

    #[test]
    fn test_full_range_when_small() {
        let range = compute_page_range(50, 10, 1, 1).unwrap();
        assert_eq!(range.total_pages, 5);
        assert_eq!(range.items, vec![P(1), P(2), P(3), P(4), P(5)]);
        assert!(range.is_first_page);
        assert!(!range.is_last_page);
    }

    #[test]
    fn test_full_range_at_threshold() {
        // 6 pages with one sibling is exactly sibling_count + 5
        assert_eq!(items(60, 10, 3, 1), vec![P(1), P(2), P(3), P(4), P(5), P(6)]);
    }

    #[test]
    fn test_both_ellipses() {
        assert_eq!(
            items(200, 10, 10, 1),
            vec![P(1), E, P(9), P(10), P(11), E, P(20)]
        );
    }

    #[test]
    fn test_right_ellipsis_only() {
        let range = compute_page_range(200, 10, 1, 1).unwrap();
        assert_eq!(range.items, vec![P(1), P(2), P(3), P(4), P(5), E, P(20)]);
        assert!(range.is_first_page);
        assert!(!range.is_last_page);
    }

    #[test]
    fn test_left_ellipsis_only() {
        let range = compute_page_range(200, 10, 20, 1).unwrap();
        assert_eq!(
            range.items,
            vec![P(1), E, P(16), P(17), P(18), P(19), P(20)]
        );
        assert!(!range.is_first_page);
        assert!(range.is_last_page);
    }

    #[test]
    fn test_partial_last_page_rounds_up() {
        let range = compute_page_range(201, 10, 1, 1).unwrap();
        assert_eq!(range.total_pages, 21);
        assert_eq!(range.items.last(), Some(&P(21)));
    }

    #[test]
    fn test_empty_collection() {
        let range = compute_page_range(0, 10, 1, 1).unwrap();
        assert_eq!(range.total_pages, 0);
        assert!(range.items.is_empty());
        assert!(range.is_first_page);
        assert!(!range.is_last_page);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert_eq!(
            compute_page_range(100, 0, 1, 1),
            Err(PaginationError::ZeroPageSize)
        );
    }

    #[test]
    fn test_zero_siblings() {
        assert_eq!(items(200, 10, 10, 0), vec![P(1), E, P(10), E, P(20)]);
        assert_eq!(items(200, 10, 1, 0), vec![P(1), P(2), P(3), E, P(20)]);
    }

    #[test]
    fn test_window_touching_both_edges_shows_everything() {
        // left sibling = 2, right sibling = 6 = total_pages - 2
        assert_eq!(
            items(80, 10, 4, 2),
            vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7), P(8)]
        );
    }

    #[test]
    fn test_edge_block_covering_all_but_last_shows_everything() {
        // edge block of 3 + 2*3 = 9 pages would swallow the last anchor
        assert_eq!(items(90, 10, 1, 3), (1..=9).map(P).collect::<Vec<_>>());
        assert_eq!(items(90, 10, 9, 3), (1..=9).map(P).collect::<Vec<_>>());
    }

    #[test]
    fn test_current_page_zero_does_not_panic() {
        let range = compute_page_range(200, 10, 0, 1).unwrap();
        assert_eq!(range.items, vec![P(1), P(2), P(3), P(4), P(5), E, P(20)]);
        assert!(!range.is_first_page);
        assert!(!range.is_last_page);
    }

    #[test]
    fn test_current_page_past_end_does_not_panic() {
        let range = compute_page_range(200, 10, 500, 1).unwrap();
        assert_eq!(
            range.items,
            vec![P(1), E, P(16), P(17), P(18), P(19), P(20)]
        );
        assert!(!range.is_last_page);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let range = compute_page_range(u64::MAX, 1, u64::MAX, 1).unwrap();
        assert_eq!(range.items.first(), Some(&P(1)));
        assert_eq!(range.items.last(), Some(&P(u64::MAX)));
        assert!(range.is_last_page);
    }

    #[test]
    fn test_serialize_items() {
        let range = compute_page_range(200, 10, 10, 1).unwrap();
        let json = serde_json::to_value(&range).unwrap();
        assert_eq!(
            json["items"],
            serde_json::json!([1, "...", 9, 10, 11, "...", 20])
        );
        assert_eq!(json["total_pages"], 20);
        assert_eq!(json["is_first_page"], false);
    }

    #[test]
    fn test_range_helpers() {
        let range = compute_page_range(200, 10, 10, 1).unwrap();
        assert_eq!(range.ellipsis_count(), 2);
        assert!(range.contains(10));
        assert!(!range.contains(12));
        assert_eq!(range.pages().collect::<Vec<_>>(), vec![1, 9, 10, 11, 20]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_full_range_below_threshold(
            total_pages in 0u64..=15,
            page_size in 1u64..=50,
            siblings in 0u64..=10,
            current in 0u64..=20,
        ) {
            prop_assume!(total_pages <= siblings + FIXED_SLOTS);
            let range = compute_page_range(total_pages * page_size, page_size, current, siblings).unwrap();
            let expected: Vec<PageItem> = (1..=total_pages).map(P).collect();
            prop_assert_eq!(range.items, expected);
        }

        #[test]
        fn prop_anchors_ellipses_and_order(
            total_count in 0u64..=5_000,
            page_size in 1u64..=25,
            siblings in 0u64..=6,
            current in 0u64..=400,
        ) {
            let range = compute_page_range(total_count, page_size, current, siblings).unwrap();

            if range.total_pages > siblings + FIXED_SLOTS {
                prop_assert_eq!(range.items.first(), Some(&P(1)));
                prop_assert_eq!(range.items.last(), Some(&P(range.total_pages)));
            }

            prop_assert!(range.ellipsis_count() <= 2);
            prop_assert!(range.items.windows(2).all(|w| !(w[0].is_ellipsis() && w[1].is_ellipsis())));

            let numbers: Vec<u64> = range.pages().collect();
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(numbers.iter().all(|n| (1..=range.total_pages).contains(n)));

            // An ellipsis always hides at least one page.
            for (i, item) in range.items.iter().enumerate() {
                if item.is_ellipsis() {
                    let before = range.items[i - 1].page().unwrap();
                    let after = range.items[i + 1].page().unwrap();
                    prop_assert!(after - before >= 2);
                }
            }

            prop_assert_eq!(range.is_first_page, current == 1);
            prop_assert_eq!(range.is_last_page, current == range.total_pages);
        }

        #[test]
        fn prop_sibling_window_is_visible(
            total_pages in 1u64..=300,
            siblings in 0u64..=6,
            current_seed in any::<u64>(),
        ) {
            let current = current_seed % total_pages + 1;
            let range = compute_page_range(total_pages, 1, current, siblings).unwrap();

            let left = current.saturating_sub(siblings).max(1);
            let right = (current + siblings).min(total_pages);
            for page in left..=right {
                prop_assert!(range.contains(page), "page {} missing from {:?}", page, range.items);
            }
        }

        #[test]
        fn prop_deterministic(
            total_count in any::<u64>(),
            page_size in 1u64..=1_000,
            current in any::<u64>(),
            siblings in 0u64..=8,
        ) {
            let first = compute_page_range(total_count, page_size, current, siblings);
            let second = compute_page_range(total_count, page_size, current, siblings);
            prop_assert_eq!(first, second);
        }
    }
}
