//! Permission Gate
//!
//! Resolves the capability set for an actor: per-user override rows win,
//! role defaults are the fallback. The set is resolved once per request
//! (middleware) and passed into service operations as an explicit
//! argument — mutations never consult the permission store themselves.

use std::collections::HashSet;

use sqlx::SqlitePool;

use crate::auth::permissions::get_default_permissions;
use crate::db::repository::{RepoResult, permission};
use shared::models::Role;

/// Immutable set of permission keys held by one actor for one request
#[derive(Debug, Clone)]
pub struct CapabilitySet {
    keys: HashSet<String>,
}

impl CapabilitySet {
    /// Build from explicit keys (tests, tooling)
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Check a permission key. `all` grants everything.
    pub fn allows(&self, key: &str) -> bool {
        self.keys.contains("all") || self.keys.contains(key)
    }
}

/// Permission resolution — pure read, no side effects
pub struct PermissionGate;

impl PermissionGate {
    /// Resolve the capability set for `user_id` with role `role`.
    ///
    /// Resolution order per key: (1) per-user override if present,
    /// (2) role default allow-list.
    pub async fn resolve(pool: &SqlitePool, user_id: &str, role: Role) -> RepoResult<CapabilitySet> {
        let mut keys: HashSet<String> = get_default_permissions(role)
            .iter()
            .map(|s| s.to_string())
            .collect();

        for row in permission::find_overrides(pool, user_id).await? {
            if row.allowed {
                keys.insert(row.permission_key);
            } else {
                keys.remove(&row.permission_key);
            }
        }

        Ok(CapabilitySet { keys })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE user_permission (
                id INTEGER PRIMARY KEY,
                user_id TEXT NOT NULL,
                permission_key TEXT NOT NULL,
                allowed INTEGER NOT NULL DEFAULT 1,
                UNIQUE (user_id, permission_key)
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    async fn insert_override(pool: &SqlitePool, user_id: &str, key: &str, allowed: bool) {
        sqlx::query("INSERT INTO user_permission (user_id, permission_key, allowed) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(key)
            .bind(allowed)
            .execute(pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn role_defaults_apply_without_overrides() {
        let pool = test_pool().await;
        let caps = PermissionGate::resolve(&pool, "emp-1", Role::OrderSupport)
            .await
            .unwrap();
        assert!(caps.allows("orders_orders_pending"));
        assert!(!caps.allows("audit_logs_view"));
    }

    #[tokio::test]
    async fn admin_all_key_grants_everything() {
        let pool = test_pool().await;
        let caps = PermissionGate::resolve(&pool, "emp-1", Role::Admin).await.unwrap();
        assert!(caps.allows("orders_orders_cancelled"));
        assert!(caps.allows("audit_logs_view"));
    }

    #[tokio::test]
    async fn allow_override_wins_over_empty_default() {
        let pool = test_pool().await;
        insert_override(&pool, "emp-2", "orders_orders_pending", true).await;

        let caps = PermissionGate::resolve(&pool, "emp-2", Role::UserManager)
            .await
            .unwrap();
        assert!(caps.allows("orders_orders_pending"));
        assert!(!caps.allows("orders_orders_processing"));
    }

    #[tokio::test]
    async fn deny_override_revokes_role_default() {
        let pool = test_pool().await;
        insert_override(&pool, "emp-3", "orders_orders_pending", false).await;

        let caps = PermissionGate::resolve(&pool, "emp-3", Role::OrderSupport)
            .await
            .unwrap();
        assert!(!caps.allows("orders_orders_pending"));
        // Other defaults untouched
        assert!(caps.allows("orders_orders_shipping"));
    }

    #[tokio::test]
    async fn overrides_are_scoped_per_user() {
        let pool = test_pool().await;
        insert_override(&pool, "emp-4", "orders_orders_pending", false).await;

        let caps = PermissionGate::resolve(&pool, "someone-else", Role::OrderSupport)
            .await
            .unwrap();
        assert!(caps.allows("orders_orders_pending"));
    }
}
