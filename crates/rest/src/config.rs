//! Server configuration.
//!
//! Configuration comes from command line flags, environment variables, or
//! code, in that order of convenience.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LARDER_PORT` | 8000 | Server port |
//! | `LARDER_HOST` | 127.0.0.1 | Host to bind |
//! | `LARDER_LOG_LEVEL` | info | Log level |
//! | `LARDER_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `LARDER_ENABLE_CORS` | true | Enable CORS |
//! | `LARDER_CORS_ORIGINS` | * | Allowed origins |
//! | `LARDER_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `LARDER_CORS_HEADERS` | Content-Type,Authorization | Allowed headers |
//! | `LARDER_DATABASE_URL` | larder.db | SQLite path, or `:memory:` |

use clap::Parser;

/// Server configuration for the catalog API.
///
/// Construct from environment variables with [`ServerConfig::from_env`],
/// from command line arguments with `ServerConfig::parse`, or
/// programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "larder")]
#[command(about = "Larder recipe catalog server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "LARDER_PORT", default_value = "8000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "LARDER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "LARDER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "LARDER_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "LARDER_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "LARDER_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "LARDER_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "LARDER_CORS_HEADERS",
        default_value = "Content-Type,Authorization"
    )]
    pub cors_headers: String,

    /// Database path (SQLite file, or :memory: for an ephemeral store).
    #[arg(long, env = "LARDER_DATABASE_URL", default_value = "larder.db")]
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization".to_string(),
            database_url: "larder.db".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a ServerConfig from environment variables, falling back to
    /// defaults without requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.database_url.is_empty() {
            errors.push("Database path cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing: ephemeral port,
    /// in-memory database, no CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            database_url: ":memory:".to_string(),
        }
    }
}
