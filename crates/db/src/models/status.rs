//! Status enums mapping to the PostgreSQL enum types created in migrations.
//!
//! The wire and storage representation is the lowercase variant name in both
//! JSON and SQL, so admin filters compare on the literal strings.

use serde::{Deserialize, Serialize};

/// Task lifecycle status (`task_status` enum type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Created,
    Processed,
    Completed,
    Cancelled,
}

/// Vacation lifecycle status (`vacation_status` enum type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "vacation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VacationStatus {
    Planned,
    Processed,
    Completed,
    Cancelled,
}
