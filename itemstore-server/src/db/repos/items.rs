//! Item repository
//!
//! Handles item CRUD:
//! - create: INSERT ... RETURNING inside a transaction
//! - get: fetch_optional with an explicit not-found mapping
//! - list: id-ascending LIMIT/OFFSET window

use sqlx::{FromRow, PgPool};

use crate::models::{ItemName, ListQuery};

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new item, returning the record with its store-assigned id.
    ///
    /// Runs inside a transaction: commit on success, rollback on drop.
    pub async fn create(
        &self,
        name: ItemName,
        description: Option<&str>,
    ) -> Result<Item, DbError> {
        let mut tx = self.pool.begin().await?;

        let item: Item = sqlx::query_as(
            r#"
            INSERT INTO items (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(name.as_str())
        .bind(description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(item)
    }

    /// Get a single item by id.
    pub async fn get(&self, id: i32) -> Result<Item, DbError> {
        sqlx::query_as::<_, Item>("SELECT id, name, description FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "Item",
                id: id.to_string(),
            })
    }

    /// List items ordered by id ascending within a limit/offset window.
    pub async fn list(&self, query: ListQuery) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, description FROM items ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}
