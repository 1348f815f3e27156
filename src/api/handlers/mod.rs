//! HTTP request handlers, grouped by resource.

pub mod health;
pub mod pagination;
