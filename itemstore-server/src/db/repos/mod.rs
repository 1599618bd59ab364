//! Repository implementations for database access
//!
//! Repositories borrow the pool for the duration of one operation and
//! issue only parameterized statements.

pub mod items;

pub use items::{DbError, Item, ItemRepo};
