//! Admin handlers for the `/admin/vacations` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::vacation::{CreateVacation, UpdateVacation, Vacation};
use atelier_db::repositories::{UserRepo, VacationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for the listing (`?user_id=`).
#[derive(Debug, Deserialize)]
pub struct VacationListParams {
    pub user_id: Option<DbId>,
}

/// POST /api/v1/admin/vacations
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateVacation>,
) -> AppResult<(StatusCode, Json<Vacation>)> {
    UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;
    if input.end_date < input.start_date {
        return Err(AppError::Core(CoreError::Validation(
            "end_date must not precede start_date".into(),
        )));
    }
    let vacation = VacationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(vacation)))
}

/// GET /api/v1/admin/vacations?user_id=
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<VacationListParams>,
) -> AppResult<Json<Vec<Vacation>>> {
    let vacations = VacationRepo::list(&state.pool, params.user_id).await?;
    Ok(Json(vacations))
}

/// GET /api/v1/admin/vacations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vacation>> {
    let vacation = VacationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vacation",
            id,
        }))?;
    Ok(Json(vacation))
}

/// PUT /api/v1/admin/vacations/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVacation>,
) -> AppResult<Json<Vacation>> {
    let vacation = VacationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vacation",
            id,
        }))?;
    Ok(Json(vacation))
}

/// DELETE /api/v1/admin/vacations/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if VacationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vacation",
            id,
        }))
    }
}
