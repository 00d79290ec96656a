//! Admin handlers for the `/admin/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_core::error::CoreError;
use atelier_core::pricing;
use atelier_core::types::DbId;
use atelier_db::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use atelier_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/admin/projects
///
/// The creator is stamped from the authenticated admin.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input, admin.user_id).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/admin/projects
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/admin/projects/{id}
///
/// Detail view enriched with the estimate/task sums and the grand total.
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let totals = ProjectRepo::totals(&state.pool, id).await?;
    let total = pricing::project_total(
        project.price,
        Some(totals.items_total),
        Some(totals.tasks_total),
    );

    Ok(Json(ProjectDetail {
        project,
        items_total: totals.items_total,
        tasks_total: totals.tasks_total,
        total,
    }))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
