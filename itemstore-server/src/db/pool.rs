//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and a pre-ping
//! liveness check before handing out pooled connections.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low for a single-entity service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// The pool connects lazily: the process starts even while the database
/// container is still coming up, and the first acquiring caller pays for
/// the handshake. Stale pooled connections are detected by a pre-ping
/// before reuse and replaced transparently.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/itemstore")?;
/// ```
pub fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS)
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .test_before_acquire(true)
        .connect_lazy(database_url)
}
