//! Refresh-token session model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// A session row from the `sessions` table. Stores only the SHA-256 hash of
/// the refresh token, never the plaintext.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
