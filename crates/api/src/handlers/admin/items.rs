//! Admin handlers for the `/admin/items` estimate-line resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use atelier_core::error::CoreError;
use atelier_core::pricing;
use atelier_core::types::DbId;
use atelier_db::models::item::{CreateItem, Item, UpdateItem};
use atelier_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Query parameters for the listing (`?project_id=`, `?search=`).
#[derive(Debug, Deserialize)]
pub struct ItemListParams {
    pub project_id: Option<DbId>,
    pub search: Option<String>,
}

/// POST /api/v1/admin/items
///
/// `total` is computed as `quantity * price`; the creator is stamped from
/// the authenticated admin.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let total = pricing::item_total(input.quantity.unwrap_or(1), input.price);
    let item = ItemRepo::create(&state.pool, &input, total, admin.user_id).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/admin/items
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ItemListParams>,
) -> AppResult<Json<Vec<Item>>> {
    let items =
        ItemRepo::list(&state.pool, params.project_id, params.search.as_deref()).await?;
    Ok(Json(items))
}

/// GET /api/v1/admin/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// PUT /api/v1/admin/items/{id}
///
/// Merges the patch over the stored row and recomputes `total` from the
/// resulting quantity and price.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<Json<Item>> {
    let current = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    let quantity = input.quantity.unwrap_or(current.quantity);
    let price = input.price.unwrap_or(current.price);
    let total = pricing::item_total(quantity, price);

    let item = ItemRepo::update(&state.pool, id, &input, total)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// DELETE /api/v1/admin/items/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ItemRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Item", id }))
    }
}
