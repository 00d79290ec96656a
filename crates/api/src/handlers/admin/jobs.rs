//! Admin handlers for the `/admin/jobs` catalog resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::job::{CreateJob, Job, UpdateJob};
use atelier_db::repositories::JobRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for the listing (`?category_id=`).
#[derive(Debug, Deserialize)]
pub struct JobListParams {
    pub category_id: Option<DbId>,
}

/// POST /api/v1/admin/jobs
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateJob>,
) -> AppResult<(StatusCode, Json<Job>)> {
    let job = JobRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/admin/jobs
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<JobListParams>,
) -> AppResult<Json<Vec<Job>>> {
    let jobs = JobRepo::list(&state.pool, params.category_id).await?;
    Ok(Json(jobs))
}

/// GET /api/v1/admin/jobs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Job>> {
    let job = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Job", id }))?;
    Ok(Json(job))
}

/// PUT /api/v1/admin/jobs/{id}
///
/// Note: price changes do not ripple into existing task totals; those are
/// recomputed on each task's next save.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJob>,
) -> AppResult<Json<Job>> {
    let job = JobRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Job", id }))?;
    Ok(Json(job))
}

/// DELETE /api/v1/admin/jobs/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if JobRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Job", id }))
    }
}
