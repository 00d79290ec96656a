//! Repository for the `tasks` table.
//!
//! `total` is always passed in by the caller, computed from the job's
//! catalog price via `atelier_core::pricing::task_total`; the repository
//! never derives money values itself.

use rust_decimal::Decimal;
use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskFilter, UpdateTask, EXPIRED_CLOSE_NOTE};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, job_id, quantity, coefficient, is_fixed_price, price, \
                       total, status, expired_at, completed_at, executor_id, creator_id, extra, \
                       created_at, updated_at";

/// Provides CRUD operations, executor-scoped listings, and the close-expired
/// bulk action for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task stamped with its creator, returning the row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTask,
        total: Decimal,
        creator_id: DbId,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, job_id, quantity, coefficient, is_fixed_price,
                                price, total, status, expired_at, executor_id, creator_id, extra)
             VALUES ($1, $2, $3, COALESCE($4, 1.00), $5, $6, $7,
                     COALESCE($8, 'created'), $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(input.job_id)
            .bind(input.quantity)
            .bind(input.coefficient)
            .bind(input.is_fixed_price)
            .bind(input.price)
            .bind(total)
            .bind(input.status)
            .bind(input.expired_at)
            .bind(input.executor_id)
            .bind(creator_id)
            .bind(&input.extra)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Admin listing with the expired / status / project filters,
    /// most recently created first.
    pub async fn list(pool: &PgPool, filter: &TaskFilter) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE ($1::task_status IS NULL OR status = $1)
               AND ($2::bigint IS NULL OR project_id = $2)
               AND ($3::boolean IS NULL
                    OR ($3 AND expired_at <= NOW())
                    OR (NOT $3 AND expired_at > NOW()))
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(filter.status)
            .bind(filter.project_id)
            .bind(filter.expired)
            .fetch_all(pool)
            .await
    }

    /// Every task assigned to an executor, most recently created first.
    pub async fn list_for_executor(pool: &PgPool, executor_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE executor_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(executor_id)
            .fetch_all(pool)
            .await
    }

    /// The executor's open tasks (created/processed), newest first.
    pub async fn recent_open_for_executor(
        pool: &PgPool,
        executor_id: DbId,
        limit: i64,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE executor_id = $1 AND status IN ('created', 'processed')
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(executor_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// The executor's open tasks, soonest deadline first.
    pub async fn expiring_open_for_executor(
        pool: &PgPool,
        executor_id: DbId,
        limit: i64,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE executor_id = $1 AND status IN ('created', 'processed')
             ORDER BY expired_at ASC
             LIMIT $2"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(executor_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// The executor's tasks whose deadline falls inside one calendar month.
    pub async fn for_executor_in_month(
        pool: &PgPool,
        executor_id: DbId,
        year: i32,
        month: u32,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE executor_id = $1
               AND EXTRACT(YEAR FROM expired_at) = $2
               AND EXTRACT(MONTH FROM expired_at) = $3
             ORDER BY expired_at ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(executor_id)
            .bind(year as i64)
            .bind(month as i64)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied; `total`
    /// is always rewritten from the recomputation.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
        total: Decimal,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                project_id = COALESCE($2, project_id),
                job_id = COALESCE($3, job_id),
                quantity = COALESCE($4, quantity),
                coefficient = COALESCE($5, coefficient),
                is_fixed_price = COALESCE($6, is_fixed_price),
                price = COALESCE($7, price),
                status = COALESCE($8, status),
                expired_at = COALESCE($9, expired_at),
                executor_id = COALESCE($10, executor_id),
                extra = COALESCE($11, extra),
                total = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(input.job_id)
            .bind(input.quantity)
            .bind(input.coefficient)
            .bind(input.is_fixed_price)
            .bind(input.price)
            .bind(input.status)
            .bind(input.expired_at)
            .bind(input.executor_id)
            .bind(&input.extra)
            .bind(total)
            .fetch_optional(pool)
            .await
    }

    /// Cancel every task in `ids` whose deadline has passed: status becomes
    /// `cancelled`, total drops to zero, and a fixed note lands in `extra`.
    ///
    /// Returns the number of tasks closed. Idempotent: a second run over the
    /// same ids rewrites the same values.
    pub async fn close_expired(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks
             SET status = 'cancelled', total = 0, extra = $2, updated_at = NOW()
             WHERE id = ANY($1) AND expired_at <= NOW()",
        )
        .bind(ids)
        .bind(EXPIRED_CLOSE_NOTE)
        .execute(pool)
        .await?;
        let closed = result.rows_affected();
        tracing::debug!(requested = ids.len(), closed, "closed expired tasks");
        Ok(closed)
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
