//! Handlers for the staff-facing `/tasks` resource.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::calendar::{self, GridDay};
use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::task::Task;
use atelier_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/tasks
///
/// Every task assigned to the caller, newest first.
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_for_executor(&state.pool, user.user_id).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
///
/// Task detail, visible to its executor or an admin. Anyone else gets a 404,
/// not a 403: the task's existence is not disclosed.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let not_found = || AppError::Core(CoreError::NotFound { entity: "Task", id });

    let task = TaskRepo::find_by_id(&state.pool, id).await?.ok_or_else(not_found)?;
    if !user.is_admin() && task.executor_id != Some(user.user_id) {
        return Err(not_found());
    }
    Ok(Json(task))
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// Query parameters for the calendar view. Month 0 and 13 roll the year.
#[derive(Debug, Deserialize)]
pub struct CalendarParams {
    pub year: Option<i32>,
    pub month: Option<i32>,
}

/// Month grid plus the caller's tasks grouped by deadline day.
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub month_abbr: &'static str,
    pub previous_year: i32,
    pub previous_month: i32,
    pub next_year: i32,
    pub next_month: i32,
    /// Full weeks of (day, weekday) cells; day 0 pads the adjacent month.
    pub weeks: Vec<Vec<GridDay>>,
    /// The caller's tasks in this month, keyed by day of their deadline.
    pub tasks_by_day: BTreeMap<u32, Vec<Task>>,
}

/// GET /api/v1/tasks/calendar?year=&month=
///
/// Defaults to the current month when parameters are omitted.
pub async fn calendar(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<CalendarParams>,
) -> AppResult<Json<CalendarResponse>> {
    let now = Utc::now();
    let window = calendar::resolve_month(
        params.year.unwrap_or_else(|| now.year()),
        params.month.unwrap_or(now.month() as i32),
    )?;
    let weeks = calendar::month_grid(window.year, window.month)?;

    let tasks =
        TaskRepo::for_executor_in_month(&state.pool, user.user_id, window.year, window.month)
            .await?;
    let mut tasks_by_day: BTreeMap<u32, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        tasks_by_day.entry(task.expired_at.day()).or_default().push(task);
    }

    Ok(Json(CalendarResponse {
        year: window.year,
        month: window.month,
        month_name: calendar::month_name(window.month),
        month_abbr: calendar::month_abbr(window.month),
        previous_year: window.previous_year,
        previous_month: window.previous_month,
        next_year: window.next_year,
        next_month: window.next_month,
        weeks,
        tasks_by_day,
    }))
}
