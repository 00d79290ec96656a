//! Repository for the `clients` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::client::{Client, CreateClient, UpdateClient};

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        sqlx::query_as::<_, Client>(
            "INSERT INTO clients (title) VALUES ($1) RETURNING id, title",
        )
        .bind(&input.title)
        .fetch_one(pool)
        .await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        sqlx::query_as::<_, Client>("SELECT id, title FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List clients, optionally filtered by a title substring search.
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<Client>, sqlx::Error> {
        sqlx::query_as::<_, Client>(
            "SELECT id, title FROM clients
             WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
             ORDER BY id",
        )
        .bind(search)
        .fetch_all(pool)
        .await
    }

    /// Update a client. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        sqlx::query_as::<_, Client>(
            "UPDATE clients SET title = COALESCE($2, title) WHERE id = $1 RETURNING id, title",
        )
        .bind(id)
        .bind(&input.title)
        .fetch_optional(pool)
        .await
    }

    /// Delete a client by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
