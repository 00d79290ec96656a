//! Vacation entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atelier_core::types::DbId;

use crate::models::status::VacationStatus;

/// A vacation row from the `vacations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vacation {
    pub id: DbId,
    pub user_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: VacationStatus,
}

/// DTO for creating a new vacation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVacation {
    pub user_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: VacationStatus,
}

/// DTO for updating an existing vacation. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVacation {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<VacationStatus>,
}
