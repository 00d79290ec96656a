//! Handler for the staff-facing `/vacations` view.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use atelier_db::models::status::VacationStatus;
use atelier_db::models::vacation::Vacation;
use atelier_db::repositories::VacationRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// The caller's vacations grouped the way the overview page shows them.
#[derive(Debug, Serialize)]
pub struct VacationsResponse {
    /// Earliest planned vacation, if one exists.
    pub next_vacation: Option<Vacation>,
    /// Length of `next_vacation` in days.
    pub days_vacation: Option<i64>,
    pub completed_vacations: Vec<Vacation>,
    pub cancelled_vacations: Vec<Vacation>,
}

/// GET /api/v1/vacations
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<VacationsResponse>> {
    let next_vacation = VacationRepo::next_planned_for_user(&state.pool, user.user_id).await?;
    let days_vacation = next_vacation
        .as_ref()
        .map(|v| (v.end_date - v.start_date).num_days());

    let completed_vacations =
        VacationRepo::list_for_user_by_status(&state.pool, user.user_id, VacationStatus::Completed)
            .await?;
    let cancelled_vacations =
        VacationRepo::list_for_user_by_status(&state.pool, user.user_id, VacationStatus::Cancelled)
            .await?;

    Ok(Json(VacationsResponse {
        next_vacation,
        days_vacation,
        completed_vacations,
        cancelled_vacations,
    }))
}
