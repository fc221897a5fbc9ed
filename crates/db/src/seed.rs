//! Fixed seed data inserted after every schema reset.

use gatehouse_core::roles::RoleName;

use crate::models::role::Role;
use crate::repositories::RoleRepo;
use crate::DbPool;

/// Insert `user` (1), `moderator` (2) and `admin` (3) in a single transaction.
///
/// Expects an empty `roles` table; a pre-existing id or name fails the whole
/// batch with a unique violation.
pub async fn seed_roles(pool: &DbPool) -> Result<Vec<Role>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let mut roles = Vec::with_capacity(RoleName::ALL.len());
    for role in RoleName::ALL {
        roles.push(RoleRepo::insert(&mut tx, role.id(), role.as_str()).await?);
    }

    tx.commit().await?;
    Ok(roles)
}
