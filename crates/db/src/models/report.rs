//! Report (internal message) entity model and DTOs.
//!
//! A report is a staff-to-administration message. `is_answered` is derived
//! on every save from the presence of a non-empty `answer`, and `updated_at`
//! is touched so the inbox sorts by latest activity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// A report row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub creator_id: DbId,
    pub theme: String,
    pub content: String,
    pub answer: Option<String>,
    pub is_answered: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new report.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReport {
    pub theme: String,
    pub content: String,
}
