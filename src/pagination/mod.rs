//! Pagination module
//!
//! Pure pagination math shared by the CLI and the HTTP API:
//! - `range` - compact page ranges with ellipsis markers
//! - `bar` - full pagination bar controls built on top of a range
//! - `simple` - "previous / current of total / next" pager
//! - `page` - page counting and clamping
//! - `render` - single-line text rendering for terminals

pub mod bar;
pub mod error;
pub mod page;
pub mod range;
pub mod render;
pub mod simple;

pub use bar::{BarControl, PaginationBar};
pub use error::PaginationError;
pub use page::{clamp_page, total_pages};
pub use range::{DEFAULT_SIBLING_COUNT, ELLIPSIS, PageItem, PageRange, compute_page_range};
pub use render::render_range;
pub use simple::SimplePager;
