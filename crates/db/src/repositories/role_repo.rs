//! Repository for the `roles` and `user_roles` tables.

use gatehouse_core::types::{DbId, RoleId};
use sqlx::{PgConnection, PgPool};

use crate::models::role::Role;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides role lookups and the seed-time insert.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a role with an explicit id, returning the created row.
    pub async fn insert(
        conn: &mut PgConnection,
        id: RoleId,
        name: &str,
    ) -> Result<Role, sqlx::Error> {
        let query = format!(
            "INSERT INTO roles (id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .bind(name)
            .fetch_one(&mut *conn)
            .await
    }

    /// List all roles ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY id ASC");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Names of every role assigned to a user, ordered by role id.
    ///
    /// Returns an empty list for an unknown user.
    pub async fn names_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT r.name FROM roles r
             JOIN user_roles ur ON ur.role_id = r.id
             WHERE ur.user_id = $1
             ORDER BY r.id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
