//! Route definitions for the staff-facing `/reports` inbox.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET  /          -> paginated inbox (?page=)
/// GET  /detail    -> single report (?id=, malformed id is a 404)
/// POST /send      -> submit a report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reports::list))
        .route("/detail", get(reports::detail))
        .route("/send", post(reports::send))
}
