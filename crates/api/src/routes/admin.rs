//! Route definitions for the `/admin` CRUD surface.
//!
//! Authorization is enforced per-handler through the `RequireAdmin`
//! extractor; every route below rejects non-admin callers with 403.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin::{
    categories, clients, items, jobs, projects, reports, tasks, users, vacations,
};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /clients                 -> list (?search=)
/// POST   /clients                 -> create
/// GET    /clients/{id}            -> get
/// PUT    /clients/{id}            -> update
/// DELETE /clients/{id}            -> delete
///
/// /projects, /categories, /jobs, /items, /vacations follow the same CRUD
/// shape, with these extras:
///
/// GET    /projects/{id}           -> detail with estimate/task totals
/// GET    /categories/tree         -> nested tree, title-ordered
/// GET    /tasks?expired=yes|no    -> expired list filter
/// POST   /tasks/close-expired     -> bulk-cancel overdue tasks
/// GET    /reports?is_answered=    -> inbox listing
/// PUT    /reports/{id}/answer     -> write/clear the answer
/// DELETE /users/{id}              -> deactivate (no row removal)
/// ```
pub fn router() -> Router<AppState> {
    let client_routes = Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route(
            "/{id}",
            get(clients::get_by_id).put(clients::update).delete(clients::delete),
        );

    let project_routes = Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_by_id).put(projects::update).delete(projects::delete),
        );

    let category_routes = Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route("/tree", get(categories::tree))
        .route(
            "/{id}",
            get(categories::get_by_id).put(categories::update).delete(categories::delete),
        );

    let job_routes = Router::new()
        .route("/", get(jobs::list).post(jobs::create))
        .route(
            "/{id}",
            get(jobs::get_by_id).put(jobs::update).delete(jobs::delete),
        );

    let task_routes = Router::new()
        .route("/", get(tasks::list).post(tasks::create))
        .route("/close-expired", post(tasks::close_expired))
        .route(
            "/{id}",
            get(tasks::get_by_id).put(tasks::update).delete(tasks::delete),
        );

    let item_routes = Router::new()
        .route("/", get(items::list).post(items::create))
        .route(
            "/{id}",
            get(items::get_by_id).put(items::update).delete(items::delete),
        );

    let vacation_routes = Router::new()
        .route("/", get(vacations::list).post(vacations::create))
        .route(
            "/{id}",
            get(vacations::get_by_id).put(vacations::update).delete(vacations::delete),
        );

    let report_routes = Router::new()
        .route("/", get(reports::list))
        .route("/{id}", get(reports::get_by_id).delete(reports::delete))
        .route("/{id}/answer", put(reports::answer));

    let user_routes = Router::new()
        .route("/", get(users::list).post(users::create))
        .route(
            "/{id}",
            get(users::get_by_id).put(users::update).delete(users::deactivate),
        );

    Router::new()
        .nest("/clients", client_routes)
        .nest("/projects", project_routes)
        .nest("/categories", category_routes)
        .nest("/jobs", job_routes)
        .nest("/tasks", task_routes)
        .nest("/items", item_routes)
        .nest("/vacations", vacation_routes)
        .nest("/reports", report_routes)
        .nest("/users", user_routes)
}
