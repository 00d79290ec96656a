//! Repository for the `projects` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectTotals, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, client_id, location, status, price, creator_id, created_at, updated_at";

/// Provides CRUD operations and money aggregates for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project stamped with its creator, returning the row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        creator_id: DbId,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, client_id, location, status, price, creator_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(input.client_id)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.price)
            .bind(creator_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                client_id = COALESCE($3, client_id),
                location = COALESCE($4, location),
                status = COALESCE($5, status),
                price = COALESCE($6, price),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.client_id)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Tasks and items pointing at the project go with it (FK CASCADE).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Item and task sums for one project; missing aggregates count as zero.
    pub async fn totals(pool: &PgPool, id: DbId) -> Result<ProjectTotals, sqlx::Error> {
        sqlx::query_as::<_, ProjectTotals>(
            "SELECT
                COALESCE((SELECT SUM(total) FROM items WHERE project_id = $1), 0) AS items_total,
                COALESCE((SELECT SUM(total) FROM tasks WHERE project_id = $1), 0) AS tasks_total",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
