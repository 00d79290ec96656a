//! Client entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::DbId;

/// A client row from the `clients` table. Owns zero or more projects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub title: String,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub title: String,
}

/// DTO for updating an existing client.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClient {
    pub title: Option<String>,
}
