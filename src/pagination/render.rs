//! Single-line text rendering of page ranges.

use super::range::{ELLIPSIS, PageItem, PageRange};

/// Render a range as `1 ... 9 [10] 11 ... 20`, bracketing the current page.
pub fn render_range(range: &PageRange) -> String {
    range
        .items
        .iter()
        .map(|item| match item {
            PageItem::Page(number) if *number == range.current_page => format!("[{number}]"),
            PageItem::Page(number) => number.to_string(),
            PageItem::Ellipsis => ELLIPSIS.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
