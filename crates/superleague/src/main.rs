//! Super League participant service.
//!
//! CRUD over a SQLite-backed participant store with an Elasticsearch
//! full-text search mirror.

use clap::Parser;
use superleague_persistence::backends::elasticsearch::{
    ElasticsearchAuth, ElasticsearchBackend, ElasticsearchConfig,
};
use superleague_persistence::backends::sqlite::SqliteBackend;
use superleague_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Creates and initializes the SQLite store from the server configuration.
fn create_store(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    info!(database = %config.database_path, "Initializing SQLite store");

    let store = if config.database_path == ":memory:" {
        SqliteBackend::in_memory()?
    } else {
        SqliteBackend::open(&config.database_path)?
    };
    store.init_schema()?;

    Ok(store)
}

/// Creates the Elasticsearch search repository from the server configuration.
fn create_search_repository(config: &ServerConfig) -> anyhow::Result<ElasticsearchBackend> {
    let nodes = config.elasticsearch_node_list();

    let auth = match (
        &config.elasticsearch_username,
        &config.elasticsearch_password,
    ) {
        (Some(username), Some(password)) => Some(ElasticsearchAuth::Basic {
            username: username.clone(),
            password: password.clone(),
        }),
        _ => None,
    };

    info!(
        nodes = ?nodes,
        index_prefix = %config.elasticsearch_index_prefix,
        "Initializing Elasticsearch search index"
    );

    let es_config = ElasticsearchConfig {
        nodes,
        index_prefix: config.elasticsearch_index_prefix.clone(),
        auth,
        ..Default::default()
    };

    Ok(ElasticsearchBackend::new(es_config)?)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting Super League participant service"
    );

    let store = create_store(&config)?;
    let search = create_search_repository(&config)?;

    let app = create_app_with_config(store, search, config.clone());
    serve(app, &config).await
}
