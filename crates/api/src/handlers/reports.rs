//! Handlers for the staff-facing `/reports` inbox.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::report::{CreateReport, Report};
use atelier_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Reports shown per page.
const PAGE_SIZE: i64 = 25;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the paginated listing (`?page=`, 1-based).
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

/// One page of the caller's inbox, latest activity first.
#[derive(Debug, Serialize)]
pub struct ReportListResponse {
    pub reports: Vec<Report>,
    pub page: i64,
    pub total_pages: i64,
    pub total_count: i64,
    /// The most recent report on this page, singled out for the header.
    pub last_report: Option<Report>,
}

/// Query parameters for the detail lookup. The id arrives as raw text so a
/// malformed value can be answered with 404 rather than a deserialize error.
#[derive(Debug, Deserialize)]
pub struct ReportDetailParams {
    pub id: Option<String>,
}

/// Request body for `POST /reports/send`. Both fields are required.
#[derive(Debug, Deserialize, Validate)]
pub struct ReportForm {
    #[validate(length(min = 1, message = "Theme is required"))]
    pub theme: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/reports?page=
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ReportListResponse>> {
    let page = params.page.unwrap_or(1).max(1);
    let offset = (page - 1) * PAGE_SIZE;

    let reports =
        ReportRepo::list_for_creator(&state.pool, user.user_id, PAGE_SIZE, offset).await?;
    let total_count = ReportRepo::count_for_creator(&state.pool, user.user_id).await?;
    let total_pages = ((total_count + PAGE_SIZE - 1) / PAGE_SIZE).max(1);
    let last_report = reports.first().cloned();

    Ok(Json(ReportListResponse {
        reports,
        page,
        total_pages,
        total_count,
        last_report,
    }))
}

/// GET /api/v1/reports/detail?id=
///
/// A missing or non-numeric id is a 404, and so is someone else's report.
pub async fn detail(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ReportDetailParams>,
) -> AppResult<Json<Report>> {
    let id: DbId = params
        .id
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| AppError::NotFound("Report not found".into()))?;

    let report = ReportRepo::find_for_creator(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;
    Ok(Json(report))
}

/// POST /api/v1/reports/send
pub async fn send(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ReportForm>,
) -> AppResult<(StatusCode, Json<Report>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let create_dto = CreateReport {
        theme: input.theme,
        content: input.content,
    };
    let report = ReportRepo::create(&state.pool, &create_dto, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(report)))
}
