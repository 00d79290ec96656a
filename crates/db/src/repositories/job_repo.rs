//! Repository for the `jobs` catalog table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::job::{CreateJob, Job, UpdateJob};

const COLUMNS: &str = "id, category_id, title, job_type, price";

/// Provides CRUD operations for the job catalog.
pub struct JobRepo;

impl JobRepo {
    /// Insert a new job, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateJob) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs (category_id, title, job_type, price)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.job_type)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a job by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all jobs, optionally restricted to one category.
    pub async fn list(pool: &PgPool, category_id: Option<DbId>) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM jobs
             WHERE ($1::bigint IS NULL OR category_id = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Update a job. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET
                category_id = COALESCE($2, category_id),
                title = COALESCE($3, title),
                job_type = COALESCE($4, job_type),
                price = COALESCE($5, price)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.job_type)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a job by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
