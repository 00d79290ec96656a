//! Repository for the `items` table.
//!
//! As with tasks, `total` arrives precomputed from
//! `atelier_core::pricing::item_total`.

use rust_decimal::Decimal;
use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::item::{CreateItem, Item, UpdateItem};

const COLUMNS: &str =
    "id, project_id, title, quantity, price, total, note, creator_id, created_at, updated_at";

/// Provides CRUD operations for estimate line items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item stamped with its creator, returning the row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateItem,
        total: Decimal,
        creator_id: DbId,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (project_id, title, quantity, price, total, note, creator_id)
             VALUES ($1, $2, COALESCE($3, 1), $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(input.quantity)
            .bind(input.price)
            .bind(total)
            .bind(&input.note)
            .bind(creator_id)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List items, optionally restricted to one project and/or a title
    /// substring search.
    pub async fn list(
        pool: &PgPool,
        project_id: Option<DbId>,
        search: Option<&str>,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items
             WHERE ($1::bigint IS NULL OR project_id = $1)
               AND ($2::text IS NULL OR title ILIKE '%' || $2 || '%')
             ORDER BY id"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(project_id)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    /// Update an item. Only non-`None` fields in `input` are applied; `total`
    /// is always rewritten from the recomputation.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItem,
        total: Decimal,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                project_id = COALESCE($2, project_id),
                title = COALESCE($3, title),
                quantity = COALESCE($4, quantity),
                price = COALESCE($5, price),
                note = COALESCE($6, note),
                total = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(input.quantity)
            .bind(input.price)
            .bind(&input.note)
            .bind(total)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
