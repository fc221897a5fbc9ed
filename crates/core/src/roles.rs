//! The closed set of roles and their fixed ids.
//!
//! Ids and names must match what `gatehouse_db::seed::seed_roles` inserts on
//! every startup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::RoleId;

pub const ROLE_USER: &str = "user";
pub const ROLE_MODERATOR: &str = "moderator";
pub const ROLE_ADMIN: &str = "admin";

/// A named authorization label that can be assigned to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    User,
    Moderator,
    Admin,
}

impl RoleName {
    /// Every role, in id order.
    pub const ALL: [RoleName; 3] = [RoleName::User, RoleName::Moderator, RoleName::Admin];

    pub const fn id(self) -> RoleId {
        match self {
            RoleName::User => 1,
            RoleName::Moderator => 2,
            RoleName::Admin => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RoleName::User => ROLE_USER,
            RoleName::Moderator => ROLE_MODERATOR,
            RoleName::Admin => ROLE_ADMIN,
        }
    }

    /// The `ROLE_*` authority string reported to clients on sign-in.
    pub fn authority(self) -> String {
        authority(self.as_str())
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_USER => Ok(RoleName::User),
            ROLE_MODERATOR => Ok(RoleName::Moderator),
            ROLE_ADMIN => Ok(RoleName::Admin),
            other => Err(CoreError::Validation(format!(
                "Failed! Role does not exist = {other}"
            ))),
        }
    }
}

/// Map a stored role name to its `ROLE_*` authority, e.g. `"admin"` -> `"ROLE_ADMIN"`.
pub fn authority(role_name: &str) -> String {
    format!("ROLE_{}", role_name.to_uppercase())
}
