//! Route definitions for the staff-facing `/tasks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET /           -> list (own tasks)
/// GET /calendar   -> month calendar (?year=&month=)
/// GET /{id}       -> detail (executor or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list))
        .route("/calendar", get(tasks::calendar))
        .route("/{id}", get(tasks::get_by_id))
}
