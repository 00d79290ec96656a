//! Project entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub client_id: DbId,
    pub location: String,
    pub status: String,
    pub price: Decimal,
    pub creator_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Item and task sums for one project, zero when it has none.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectTotals {
    pub items_total: Decimal,
    pub tasks_total: Decimal,
}

/// Project row enriched with its money aggregates for the admin detail view.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub items_total: Decimal,
    pub tasks_total: Decimal,
    /// `price + items_total + tasks_total`.
    pub total: Decimal,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub client_id: DbId,
    pub location: String,
    pub status: String,
    pub price: Decimal,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub client_id: Option<DbId>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub price: Option<Decimal>,
}
