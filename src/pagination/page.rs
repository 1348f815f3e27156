//! Page counting and clamping helpers.

/// Number of pages needed for `total_count` items.
///
/// A zero `page_size` is treated as 1; use
/// [`compute_page_range`](super::compute_page_range) when a zero page size
/// must be reported instead.
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    total_count.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `1..=total_pages`.
///
/// An empty collection still has a page 1 to land on.
pub fn clamp_page(page: u64, total_pages: u64) -> u64 {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(200, 10), 20);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
