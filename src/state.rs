//! Application state for Axum web framework.
//!
//! Shared, read-only configuration that handlers need at request time.

use std::sync::Arc;

use crate::config::settings::{ApplicationConfig, PaginationConfig, ServerConfig, Settings};

/// State handed to every request handler.
///
/// Cloning is cheap; the configuration sits behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn application(&self) -> &ApplicationConfig {
        &self.settings.application
    }

    pub fn server(&self) -> &ServerConfig {
        &self.settings.server
    }

    /// Pagination defaults and limits applied to incoming queries
    pub fn pagination(&self) -> &PaginationConfig {
        &self.settings.pagination
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
