//! Command handlers for CLI operations

pub mod range;
pub mod serve;

pub use range::{RangeArgs, RangeCommandHandler};
pub use serve::ServeCommandHandler;
