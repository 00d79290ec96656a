//! Admin handlers for the `/admin/reports` inbox.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::report::Report;
use atelier_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for the listing (`?is_answered=`).
#[derive(Debug, Deserialize)]
pub struct ReportListParams {
    pub is_answered: Option<bool>,
}

/// Request body for `PUT /admin/reports/{id}/answer`. A null or empty
/// answer reopens the report.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer: Option<String>,
}

/// GET /api/v1/admin/reports?is_answered=
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ReportListParams>,
) -> AppResult<Json<Vec<Report>>> {
    let reports = ReportRepo::list(&state.pool, params.is_answered).await?;
    Ok(Json(reports))
}

/// GET /api/v1/admin/reports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Report>> {
    let report = ReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;
    Ok(Json(report))
}

/// PUT /api/v1/admin/reports/{id}/answer
///
/// Writes the answer; `is_answered` follows from its presence.
pub async fn answer(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<AnswerRequest>,
) -> AppResult<Json<Report>> {
    let report = ReportRepo::answer(&state.pool, id, input.answer.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;
    Ok(Json(report))
}

/// DELETE /api/v1/admin/reports/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ReportRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))
    }
}
