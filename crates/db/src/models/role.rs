//! Role entity model.

use gatehouse_core::types::{RoleId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
