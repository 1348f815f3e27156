//! Serve command handler: dry-run validation or server startup.

use crate::config::{Environment, settings::Settings};
use crate::error::AppResult;
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
    environment: Environment,
}

impl ServeCommandHandler {
    pub fn new(config: Settings, environment: Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    /// Validate only when `dry_run` is set, otherwise run the server until
    /// shutdown.
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Server startup or runtime errors
    pub async fn execute(self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            return self.validate_only();
        }

        Server::new(self.config, self.environment).run().await?;
        Ok(())
    }

    /// Validate configuration and print a summary without binding a socket.
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        let pagination = &self.config.pagination;
        println!("✓ Configuration is valid ({})", self.environment);
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ Pagination: page size {} (max {}), siblings {} (max {})",
            pagination.default_page_size,
            pagination.max_page_size,
            pagination.default_sibling_count,
            pagination.max_sibling_count
        );
        println!("✓ Logger level: {}", self.config.logger.level);
        println!("Dry run completed successfully - configuration is ready for deployment");
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_handler_new() {
        let config = Settings::default();
        let handler = ServeCommandHandler::new(config.clone(), Environment::Test);
        assert_eq!(handler.config(), &config);
    }

    #[tokio::test]
    async fn test_serve_handler_dry_run() {
        let handler = ServeCommandHandler::new(Settings::default(), Environment::Test);
        assert!(handler.execute(true).await.is_ok());
    }

    #[tokio::test]
    async fn test_serve_handler_dry_run_invalid_config() {
        let mut config = Settings::default();
        config.pagination.default_page_size = 0;
        let handler = ServeCommandHandler::new(config, Environment::Test);

        assert!(handler.execute(true).await.is_err());
    }
}
