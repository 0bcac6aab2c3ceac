//! Server configuration for the participant REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SUPERLEAGUE_SERVER_PORT` | 8080 | Server port |
//! | `SUPERLEAGUE_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `SUPERLEAGUE_LOG_LEVEL` | info | Log level |
//! | `SUPERLEAGUE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `SUPERLEAGUE_ENABLE_CORS` | true | Enable CORS |
//! | `SUPERLEAGUE_CORS_ORIGINS` | * | Allowed origins |
//! | `SUPERLEAGUE_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `SUPERLEAGUE_CORS_HEADERS` | Content-Type,Authorization,Accept | Allowed headers |
//! | `SUPERLEAGUE_BASE_URL` | http://localhost:8080 | Server base URL |
//! | `SUPERLEAGUE_DATABASE_PATH` | participants.db | SQLite database path |
//! | `SUPERLEAGUE_ELASTICSEARCH_NODES` | http://localhost:9200 | ES node URLs (comma-separated) |
//! | `SUPERLEAGUE_ELASTICSEARCH_INDEX_PREFIX` | superleague | ES index name prefix |
//!
//! # Example
//!
//! ```rust
//! use superleague_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Server configuration for the participant REST API.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "superleague")]
#[command(about = "Super League participant service")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "SUPERLEAGUE_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "SUPERLEAGUE_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "SUPERLEAGUE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "SUPERLEAGUE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "SUPERLEAGUE_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "SUPERLEAGUE_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "SUPERLEAGUE_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "SUPERLEAGUE_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Base URL for the server (used in Location headers).
    #[arg(
        long,
        env = "SUPERLEAGUE_BASE_URL",
        default_value = "http://localhost:8080"
    )]
    pub base_url: String,

    /// Path to the SQLite database file (use :memory: for an in-memory store).
    #[arg(
        long,
        env = "SUPERLEAGUE_DATABASE_PATH",
        default_value = "participants.db"
    )]
    pub database_path: String,

    /// Elasticsearch node URLs (comma-separated).
    #[arg(
        long,
        env = "SUPERLEAGUE_ELASTICSEARCH_NODES",
        default_value = "http://localhost:9200"
    )]
    pub elasticsearch_nodes: String,

    /// Elasticsearch index name prefix.
    #[arg(
        long,
        env = "SUPERLEAGUE_ELASTICSEARCH_INDEX_PREFIX",
        default_value = "superleague"
    )]
    pub elasticsearch_index_prefix: String,

    /// Elasticsearch username for basic auth.
    #[arg(long, env = "SUPERLEAGUE_ELASTICSEARCH_USERNAME")]
    pub elasticsearch_username: Option<String>,

    /// Elasticsearch password for basic auth.
    #[arg(long, env = "SUPERLEAGUE_ELASTICSEARCH_PASSWORD")]
    pub elasticsearch_password: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            base_url: "http://localhost:8080".to_string(),
            database_path: "participants.db".to_string(),
            elasticsearch_nodes: "http://localhost:9200".to_string(),
            elasticsearch_index_prefix: "superleague".to_string(),
            elasticsearch_username: None,
            elasticsearch_password: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the Elasticsearch node URLs as a list.
    pub fn elasticsearch_node_list(&self) -> Vec<String> {
        self.elasticsearch_nodes
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
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

        if self.database_path.is_empty() {
            errors.push("Database path cannot be empty".to_string());
        }

        if self.elasticsearch_node_list().is_empty() {
            errors.push("At least one Elasticsearch node is required".to_string());
        }

        if self.elasticsearch_username.is_some() != self.elasticsearch_password.is_some() {
            errors.push(
                "Elasticsearch username and password must be provided together".to_string(),
            );
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://localhost:0".to_string(),
            database_path: ":memory:".to_string(),
            elasticsearch_nodes: "http://localhost:9200".to_string(),
            elasticsearch_index_prefix: "superleague_test".to_string(),
            elasticsearch_username: None,
            elasticsearch_password: None,
        }
    }
}
