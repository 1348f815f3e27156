//! CLI argument parsing with clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Pagination range calculator and HTTP API
#[derive(Parser, Debug)]
#[command(name = "pager-rs")]
#[command(about = "Pagination range calculator and HTTP API")]
#[command(long_about = "
pager-rs computes compact page ranges (1 ... 9 [10] 11 ... 20) for
paginated lists, either from the command line or over an HTTP API.

EXAMPLES:
    # Start the server with default configuration
    pager-rs serve

    # Start server on custom host and port
    pager-rs serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    pager-rs --config /path/to/config.toml serve

    # Check configuration without starting server
    pager-rs serve --dry-run

    # Print the range for page 10 of 200 records
    pager-rs range --total-count 200 --current-page 10

    # Same range as JSON, two siblings on each side
    pager-rs range --total-count 200 --current-page 10 --sibling-count 2 --json
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this TOML file instead of the layered `config/` directory.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection (`PAGER_APP_ENV`)
    ///
    /// Selects which `config/{environment}.toml` is layered over the defaults.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server (default)
    ///
    /// Examples:
    ///   pager-rs serve                           # Start with defaults
    ///   pager-rs serve --host 0.0.0.0 --port 80  # Bind to all interfaces on port 80
    ///   pager-rs serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override, takes precedence over --verbose/--quiet
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the page range for a paginated list
    ///
    /// Omitted sizes fall back to the configured pagination defaults.
    ///
    /// Examples:
    ///   pager-rs range --total-count 95                    # [1] 2 3 4 5 ... 10
    ///   pager-rs range --total-count 95 --current-page 5 --json
    Range {
        /// Total number of records
        #[arg(short, long, value_name = "COUNT")]
        total_count: u64,

        /// Records per page
        #[arg(short = 's', long, value_name = "SIZE", value_parser = super::validation::validate_page_size)]
        page_size: Option<u64>,

        /// Current page (1-based)
        #[arg(short = 'p', long, value_name = "PAGE", default_value_t = 1)]
        current_page: u64,

        /// Pages shown on each side of the current page
        #[arg(long, value_name = "COUNT")]
        sibling_count: Option<u64>,

        /// Print the range as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// Environment from `--env`, falling back to `PAGER_APP_ENV`.
    pub fn environment(&self) -> crate::config::Environment {
        self.env
            .map(Into::into)
            .unwrap_or_else(crate::config::Environment::from_env)
    }

    /// Check argument combinations clap cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_string()
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
