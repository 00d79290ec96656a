//! Repository for the `reports` table.
//!
//! Invariant maintained here: `is_answered` is true exactly when `answer` is
//! present and non-empty, and every write touches `updated_at` so the inbox
//! sorts by latest activity.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::report::{CreateReport, Report};

const COLUMNS: &str =
    "id, creator_id, theme, content, answer, is_answered, created_at, updated_at";

/// Provides inbox operations for reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a new report from a staff member, returning the row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReport,
        creator_id: DbId,
    ) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (creator_id, theme, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(creator_id)
            .bind(&input.theme)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a report by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a report only if it belongs to the given creator.
    pub async fn find_for_creator(
        pool: &PgPool,
        id: DbId,
        creator_id: DbId,
    ) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1 AND creator_id = $2");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(creator_id)
            .fetch_optional(pool)
            .await
    }

    /// One page of a creator's reports, latest activity first.
    pub async fn list_for_creator(
        pool: &PgPool,
        creator_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reports
             WHERE creator_id = $1
             ORDER BY updated_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(creator_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of reports a creator has sent.
    pub async fn count_for_creator(pool: &PgPool, creator_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reports WHERE creator_id = $1")
            .bind(creator_id)
            .fetch_one(pool)
            .await
    }

    /// Admin listing, optionally filtered on the answered flag,
    /// latest activity first.
    pub async fn list(
        pool: &PgPool,
        is_answered: Option<bool>,
    ) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reports
             WHERE ($1::boolean IS NULL OR is_answered = $1)
             ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(is_answered)
            .fetch_all(pool)
            .await
    }

    /// Write (or clear) the administrator's answer. `is_answered` is derived
    /// from the new answer in the same statement.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn answer(
        pool: &PgPool,
        id: DbId,
        answer: Option<&str>,
    ) -> Result<Option<Report>, sqlx::Error> {
        let query = format!(
            "UPDATE reports SET
                answer = $2,
                is_answered = COALESCE($2, '') <> '',
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(answer)
            .fetch_optional(pool)
            .await
    }

    /// Delete a report by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
