//! Configuration management for pager-rs
//!
//! Configuration is layered, lowest priority first:
//! 1. `default.toml` - base configuration (required)
//! 2. `{environment}.toml` - environment-specific overrides
//! 3. `local.toml` - local overrides, not committed
//! 4. `PAGER_*` environment variables

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{PaginationConfig, ServerConfig, Settings};
