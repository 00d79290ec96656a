//! Admin handlers for the `/admin/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atelier_core::category::{build_tree, CategoryNode, CategoryRow};
use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::category::{Category, CreateCategory, UpdateCategory};
use atelier_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/admin/categories
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    if let Some(parent_id) = input.parent_id {
        CategoryRepo::find_by_id(&state.pool, parent_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Category",
                id: parent_id,
            }))?;
    }
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/admin/categories
///
/// Flat listing ordered by title.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/v1/admin/categories/tree
///
/// The nested tree, children ordered by title at every level.
pub async fn tree(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<CategoryNode>>> {
    let rows: Vec<CategoryRow> = CategoryRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|c| CategoryRow {
            id: c.id,
            title: c.title,
            parent_id: c.parent_id,
        })
        .collect();
    Ok(Json(build_tree(&rows)))
}

/// GET /api/v1/admin/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// PUT /api/v1/admin/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// Subcategories and their jobs cascade away with it.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CategoryRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}
