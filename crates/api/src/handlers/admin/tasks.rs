//! Admin handlers for the `/admin/tasks` resource: CRUD with total
//! recomputation, the expired filter, and the close-expired bulk action.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::error::CoreError;
use atelier_core::pricing;
use atelier_core::types::DbId;
use atelier_db::models::status::TaskStatus;
use atelier_db::models::task::{CreateTask, Task, TaskFilter, UpdateTask};
use atelier_db::repositories::{JobRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the admin listing.
///
/// `expired` takes the literal `yes` / `no`; any other value leaves the
/// filter off.
#[derive(Debug, Deserialize)]
pub struct TaskListParams {
    pub expired: Option<String>,
    pub status: Option<TaskStatus>,
    pub project_id: Option<DbId>,
}

impl TaskListParams {
    fn into_filter(self) -> TaskFilter {
        let expired = match self.expired.as_deref() {
            Some("yes") => Some(true),
            Some("no") => Some(false),
            _ => None,
        };
        TaskFilter {
            expired,
            status: self.status,
            project_id: self.project_id,
        }
    }
}

/// Request body for the close-expired bulk action.
#[derive(Debug, Deserialize)]
pub struct CloseExpiredRequest {
    pub ids: Vec<DbId>,
}

/// Result of the close-expired bulk action.
#[derive(Debug, Serialize)]
pub struct CloseExpiredResponse {
    /// How many of the selected tasks were past their deadline and closed.
    pub closed: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/tasks
///
/// `total` is computed from the job's catalog price; the creator is stamped
/// from the authenticated admin.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let job = JobRepo::find_by_id(&state.pool, input.job_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Job",
            id: input.job_id,
        }))?;

    let coefficient = input.coefficient.unwrap_or(Decimal::ONE);
    let total = pricing::task_total(job.price, input.quantity, coefficient);

    let task = TaskRepo::create(&state.pool, &input, total, admin.user_id).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/admin/tasks?expired=&status=&project_id=
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool, &params.into_filter()).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/admin/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PUT /api/v1/admin/tasks/{id}
///
/// Merges the patch over the stored row, then recomputes `total` from the
/// (possibly new) job price, quantity, and coefficient -- every save rewrites
/// the total, manual edits included.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    let current = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    let job_id = input.job_id.unwrap_or(current.job_id);
    let job = JobRepo::find_by_id(&state.pool, job_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Job",
            id: job_id,
        }))?;

    let quantity = input.quantity.unwrap_or(current.quantity);
    let coefficient = input.coefficient.unwrap_or(current.coefficient);
    let total = pricing::task_total(job.price, quantity, coefficient);

    let task = TaskRepo::update(&state.pool, id, &input, total)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /api/v1/admin/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}

/// POST /api/v1/admin/tasks/close-expired
///
/// Cancels the selected tasks whose deadline has passed. Safe to re-run.
pub async fn close_expired(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CloseExpiredRequest>,
) -> AppResult<Json<CloseExpiredResponse>> {
    let closed = TaskRepo::close_expired(&state.pool, &input.ids).await?;
    Ok(Json(CloseExpiredResponse { closed }))
}
