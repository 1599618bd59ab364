//! HTTP server command
//!
//! Creates the pool, initializes the schema (with startup retries), and
//! runs the server until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use itemstore_server::db::{create_pool, schema};
use itemstore_server::http::{run_server, ServerConfig};

/// Fallback development database, matching the compose setup.
const DEFAULT_DATABASE_URL: &str = "postgres://myuser:mypassword@db:5432/mydb";

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (falls back to the local development default)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("Starting itemstore server on {}", args.bind);

    // Lazy pool: succeeds even while the database is still coming up
    let pool = create_pool(&database_url).context("Failed to create database pool")?;

    // Bounded startup retries; a dead database is logged, not fatal
    schema::init_schema(&pool).await;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
