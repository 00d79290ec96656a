//! Repository for the `vacations` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::status::VacationStatus;
use crate::models::vacation::{CreateVacation, UpdateVacation, Vacation};

const COLUMNS: &str = "id, user_id, start_date, end_date, status";

/// Provides CRUD operations and staff-facing listings for vacations.
pub struct VacationRepo;

impl VacationRepo {
    /// Insert a new vacation, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVacation) -> Result<Vacation, sqlx::Error> {
        let query = format!(
            "INSERT INTO vacations (user_id, start_date, end_date, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vacation>(&query)
            .bind(input.user_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a vacation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vacation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vacations WHERE id = $1");
        sqlx::query_as::<_, Vacation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Admin listing, optionally for one user, newest start first.
    pub async fn list(pool: &PgPool, user_id: Option<DbId>) -> Result<Vec<Vacation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vacations
             WHERE ($1::bigint IS NULL OR user_id = $1)
             ORDER BY start_date DESC"
        );
        sqlx::query_as::<_, Vacation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// A user's vacations in one status, earliest start first.
    pub async fn list_for_user_by_status(
        pool: &PgPool,
        user_id: DbId,
        status: VacationStatus,
    ) -> Result<Vec<Vacation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vacations
             WHERE user_id = $1 AND status = $2
             ORDER BY start_date ASC"
        );
        sqlx::query_as::<_, Vacation>(&query)
            .bind(user_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// The user's earliest planned vacation, if any.
    pub async fn next_planned_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Vacation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vacations
             WHERE user_id = $1 AND status = 'planned'
             ORDER BY start_date ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Vacation>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// The user's latest planned-or-running vacation, shown on the account
    /// dashboard.
    pub async fn current_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Vacation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vacations
             WHERE user_id = $1 AND status IN ('planned', 'processed')
             ORDER BY start_date DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Vacation>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a vacation. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVacation,
    ) -> Result<Option<Vacation>, sqlx::Error> {
        let query = format!(
            "UPDATE vacations SET
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                status = COALESCE($4, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vacation>(&query)
            .bind(id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vacation by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vacations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
