//! Job catalog entity model and DTOs.
//!
//! A job is an immutable-by-convention catalog entry: a unit price for a
//! category of work, referenced by tasks for pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::DbId;

/// A job row from the `jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub job_type: String,
    pub price: Decimal,
}

/// DTO for creating a new job.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJob {
    pub category_id: DbId,
    pub title: String,
    pub job_type: String,
    pub price: Decimal,
}

/// DTO for updating an existing job. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJob {
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub job_type: Option<String>,
    pub price: Option<Decimal>,
}
