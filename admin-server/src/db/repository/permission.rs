//! Permission Override Repository
//!
//! Read side of the permission store: per-user override rows consulted by
//! the permission gate. Writes happen in the external user-management
//! surface, not here.

use super::RepoResult;
use shared::models::UserPermission;
use sqlx::SqlitePool;

pub async fn find_overrides(pool: &SqlitePool, user_id: &str) -> RepoResult<Vec<UserPermission>> {
    let overrides = sqlx::query_as::<_, UserPermission>(
        "SELECT user_id, permission_key, allowed FROM user_permission WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(overrides)
}
