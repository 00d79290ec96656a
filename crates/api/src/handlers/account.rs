//! Handler for the `/account` dashboard.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use atelier_db::models::task::Task;
use atelier_db::models::vacation::Vacation;
use atelier_db::repositories::{TaskRepo, VacationRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// How many tasks each dashboard list shows.
const DASHBOARD_TASKS: i64 = 5;

/// Dashboard payload: the caller's freshest open tasks, the ones closest to
/// their deadline, and the vacation currently planned or running.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub created_tasks: Vec<Task>,
    pub expired_tasks: Vec<Task>,
    pub vacation: Option<Vacation>,
}

/// GET /api/v1/account
pub async fn account(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<AccountResponse>> {
    let created_tasks =
        TaskRepo::recent_open_for_executor(&state.pool, user.user_id, DASHBOARD_TASKS).await?;
    let expired_tasks =
        TaskRepo::expiring_open_for_executor(&state.pool, user.user_id, DASHBOARD_TASKS).await?;
    let vacation = VacationRepo::current_for_user(&state.pool, user.user_id).await?;

    Ok(Json(AccountResponse {
        created_tasks,
        expired_tasks,
        vacation,
    }))
}
