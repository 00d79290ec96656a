//! Role name constants shared by the auth layer and seed data.

/// Full access, including every `/admin` endpoint.
pub const ROLE_ADMIN: &str = "admin";

/// Regular staff member: own account, tasks, vacations, and reports.
pub const ROLE_STAFF: &str = "staff";
