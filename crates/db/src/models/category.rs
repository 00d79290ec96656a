//! Category entity model and DTOs.
//!
//! Categories form a parent-pointer tree; nesting is assembled in
//! `atelier_core::category` from the flat rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::DbId;

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub title: String,
    pub parent_id: Option<DbId>,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub title: String,
    pub parent_id: Option<DbId>,
}

/// DTO for updating an existing category. Omitted fields are left alone;
/// reparenting to the root is done with `detach_parent`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub title: Option<String>,
    pub parent_id: Option<DbId>,
    /// When true, clears the parent pointer and makes the category a root.
    #[serde(default)]
    pub detach_parent: bool,
}
