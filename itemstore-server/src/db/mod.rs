//! Database layer - connection pool, schema setup, and repositories
//!
//! # Design Principles
//!
//! - Connection pool with pre-ping, passed explicitly - no process globals
//! - Every statement is parameterized - no string interpolation of input
//! - Transactions for writes, plain pool access for reads

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::*;
