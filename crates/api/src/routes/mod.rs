//! Route tree assembly.

pub mod account;
pub mod admin;
pub mod auth;
pub mod health;
pub mod reports;
pub mod tasks;
pub mod vacations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/signup                public
/// /auth/login                 public
/// /auth/refresh               public
/// /auth/logout                requires auth
///
/// /account                    dashboard (requires auth)
/// /tasks                      own tasks (requires auth)
/// /tasks/calendar             month grid + tasks by deadline day
/// /tasks/{id}                 detail, executor or admin
/// /vacations                  own vacations grouped by status
/// /reports                    own inbox, paginated
/// /reports/detail?id=         single report
/// /reports/send               submit
///
/// /admin/...                  CRUD surface (admin role)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/account", account::router())
        .nest("/tasks", tasks::router())
        .nest("/vacations", vacations::router())
        .nest("/reports", reports::router())
        .nest("/admin", admin::router())
}
