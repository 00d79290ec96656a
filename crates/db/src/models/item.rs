//! Estimate line item model and DTOs.
//!
//! An item is a manually priced line on a project's cost estimate;
//! `total` is recomputed as `quantity * price` on every save.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// An item row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub title: String,
    pub quantity: i32,
    pub price: Decimal,
    pub total: Option<Decimal>,
    pub note: Option<String>,
    pub creator_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub project_id: Option<DbId>,
    pub title: String,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i32>,
    pub price: Decimal,
    pub note: Option<String>,
}

/// DTO for updating an existing item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub project_id: Option<DbId>,
    pub title: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
    pub note: Option<String>,
}
