//! itemstore-server: items CRUD over HTTP
//!
//! Exposes a single `items` table through four operations (health check,
//! create, get-by-id, list) on top of a PostgreSQL connection pool.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, AppState, ServerConfig};
