//! HTTP server lifecycle: bind, serve, graceful shutdown.

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::create_router;
use crate::config::{Environment, settings::Settings};
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
    environment: Environment,
}

impl Server {
    pub fn new(settings: Settings, environment: Environment) -> Self {
        Self {
            settings,
            environment,
        }
    }

    /// Serve the API until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// - the configured address cannot be bound
    /// - the server fails while running
    pub async fn run(self) -> anyhow::Result<()> {
        let Self {
            settings,
            environment,
        } = self;

        tracing::info!(
            app_name = %settings.application.name,
            app_version = %settings.application.version,
            environment = %environment,
            "Application starting"
        );
        tracing::info!(
            host = %settings.server.host,
            port = settings.server.port,
            request_timeout = settings.server.request_timeout,
            "Server configuration loaded"
        );
        tracing::info!(
            default_page_size = settings.pagination.default_page_size,
            max_page_size = settings.pagination.max_page_size,
            default_sibling_count = settings.pagination.default_sibling_count,
            max_sibling_count = settings.pagination.max_sibling_count,
            "Pagination configuration loaded"
        );

        let address = settings.server.address();
        let router = create_router(AppState::new(settings));

        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated unexpectedly")?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Resolve once Ctrl+C or SIGTERM is received.
///
/// If a signal handler cannot be installed, that branch never resolves and
/// the other one still shuts the server down.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
