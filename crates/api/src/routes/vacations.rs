//! Route definition for the staff-facing `/vacations` view.

use axum::routing::get;
use axum::Router;

use crate::handlers::vacations;
use crate::state::AppState;

/// Routes mounted at `/vacations`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(vacations::list))
}
