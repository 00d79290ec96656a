//! Task entity model and DTOs.
//!
//! A task is a billable unit of work priced off its job's catalog entry.
//! `total` is recomputed as `job.price * quantity * coefficient` on every
//! save; `is_fixed_price` and `price` are carried in the schema but do not
//! feed the computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

use crate::models::status::TaskStatus;

/// Note written into `extra` when the close-expired action cancels a task.
pub const EXPIRED_CLOSE_NOTE: &str = "Task expired and closed.";

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub job_id: DbId,
    pub quantity: i32,
    pub coefficient: Decimal,
    pub is_fixed_price: bool,
    pub price: Option<Decimal>,
    pub total: Decimal,
    pub status: TaskStatus,
    pub expired_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub executor_id: Option<DbId>,
    pub creator_id: Option<DbId>,
    pub extra: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub project_id: Option<DbId>,
    pub job_id: DbId,
    pub quantity: i32,
    /// Defaults to 1.00 when omitted.
    pub coefficient: Option<Decimal>,
    #[serde(default)]
    pub is_fixed_price: bool,
    pub price: Option<Decimal>,
    pub status: Option<TaskStatus>,
    pub expired_at: Timestamp,
    pub executor_id: Option<DbId>,
    pub extra: Option<String>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub project_id: Option<DbId>,
    pub job_id: Option<DbId>,
    pub quantity: Option<i32>,
    pub coefficient: Option<Decimal>,
    pub is_fixed_price: Option<bool>,
    pub price: Option<Decimal>,
    pub status: Option<TaskStatus>,
    pub expired_at: Option<Timestamp>,
    pub executor_id: Option<DbId>,
    pub extra: Option<String>,
}

/// Filters accepted by the admin task listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    /// `Some(true)` keeps only tasks past their deadline, `Some(false)`
    /// only tasks still within it.
    pub expired: Option<bool>,
    pub status: Option<TaskStatus>,
    pub project_id: Option<DbId>,
}
