//! CRUD administration handlers, the API rendition of the admin screens.
//!
//! Every handler takes [`RequireAdmin`](crate::middleware::rbac::RequireAdmin)
//! and rejects non-admin callers with 403.

pub mod categories;
pub mod clients;
pub mod items;
pub mod jobs;
pub mod projects;
pub mod reports;
pub mod tasks;
pub mod users;
pub mod vacations;
