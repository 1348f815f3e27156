//! Full pagination bar: previous / numbered pages / next.
//!
//! The bar is a view over a [`PageRange`]. Each control knows which page
//! selecting it navigates to, so a renderer only has to draw controls and
//! forward the target of whichever one was picked.

use serde::Serialize;
use utoipa::ToSchema;

use super::page::clamp_page;
use super::range::{PageItem, PageRange};

/// A single control of a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BarControl {
    /// Step back one page
    Previous { target: Option<u64>, disabled: bool },
    /// A numbered page
    Page { number: u64, active: bool },
    /// An elided run of pages
    Ellipsis,
    /// Step forward one page
    Next { target: Option<u64>, disabled: bool },
}

impl BarControl {
    /// Page to navigate to when this control is selected.
    ///
    /// Disabled controls, the active page and ellipses request nothing.
    pub fn target(&self) -> Option<u64> {
        match *self {
            BarControl::Previous { target, disabled } | BarControl::Next { target, disabled } => {
                target.filter(|_| !disabled)
            }
            BarControl::Page { number, active } => (!active).then_some(number),
            BarControl::Ellipsis => None,
        }
    }
}

/// Controls of a full pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationBar {
    /// Whether the bar should not be rendered at all
    pub hidden: bool,

    /// Controls, left to right
    pub controls: Vec<BarControl>,

    #[serde(skip)]
    range: PageRange,
}

impl PaginationBar {
    /// Build the bar for a computed range.
    ///
    /// Nothing is rendered when the current page is 0 or when the range
    /// holds fewer than two items.
    pub fn new(range: PageRange) -> Self {
        let hidden = range.current_page == 0 || range.items.len() < 2;
        let controls = if hidden {
            Vec::new()
        } else {
            build_controls(&range)
        };

        Self {
            hidden,
            controls,
            range,
        }
    }

    /// The range this bar was built from.
    pub fn range(&self) -> &PageRange {
        &self.range
    }

    /// Page requested by the "previous" control, if enabled.
    pub fn previous(&self) -> Option<u64> {
        self.controls.first().and_then(BarControl::target)
    }

    /// Page requested by the "next" control, if enabled.
    pub fn next(&self) -> Option<u64> {
        self.controls.last().and_then(BarControl::target)
    }

    /// Page requested by selecting the control at `index`.
    pub fn select(&self, index: usize) -> Option<u64> {
        self.controls.get(index).and_then(BarControl::target)
    }
}

fn build_controls(range: &PageRange) -> Vec<BarControl> {
    let current = range.current_page;
    let total = range.total_pages;

    let previous = BarControl::Previous {
        target: (!range.is_first_page).then(|| clamp_page(current.saturating_sub(1), total)),
        disabled: range.is_first_page,
    };
    let next = BarControl::Next {
        target: (!range.is_last_page).then(|| clamp_page(current.saturating_add(1), total)),
        disabled: range.is_last_page,
    };

    let pages = range.items.iter().map(|item| match *item {
        PageItem::Page(number) => BarControl::Page {
            number,
            active: number == current,
        },
        PageItem::Ellipsis => BarControl::Ellipsis,
    });

    std::iter::once(previous)
        .chain(pages)
        .chain(std::iter::once(next))
        .collect()
}
