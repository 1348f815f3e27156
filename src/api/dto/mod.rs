//! Data Transfer Objects for API requests and responses.
//!
//! - `error` - common error response body
//! - `health` - health check responses
//! - `pagination` - pagination query parameters and responses

mod error;
mod health;
mod pagination;

pub use error::ErrorResponse;
pub use health::{HealthResponse, HealthStatus};
pub use pagination::{PageRangeRequest, RangeQuery, SimplePagerResponse, SimpleQuery};
