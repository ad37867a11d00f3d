//! Permission Override Model

use serde::{Deserialize, Serialize};

/// Per-user permission override row.
///
/// When present for a `(user_id, permission_key)` pair it wins over the
/// role default: `allowed = true` grants the key, `allowed = false`
/// revokes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct UserPermission {
    pub user_id: String,
    pub permission_key: String,
    pub allowed: bool,
}
