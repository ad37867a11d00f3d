//! Activity Log Repository
//!
//! Append-only writes plus the query side for the audit API. Entries are
//! never updated or deleted.

use super::RepoResult;
use shared::models::{ActivityLog, ChangesDiff};
use sqlx::SqlitePool;

/// Payload for a new audit entry
#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub actor_id: String,
    pub actor_label: Option<String>,
    pub action: String,
    pub table_affected: String,
    pub record_id: String,
    pub description: String,
    pub changes: Option<ChangesDiff>,
}

pub async fn insert(pool: &SqlitePool, entry: NewActivityLog, now: i64) -> RepoResult<i64> {
    let changes_json = entry
        .changes
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| super::RepoError::Validation(format!("Unserializable changes diff: {e}")))?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO activity_log (actor_id, actor_label, action, table_affected, record_id, description, changes, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&entry.actor_id)
    .bind(&entry.actor_label)
    .bind(&entry.action)
    .bind(&entry.table_affected)
    .bind(&entry.record_id)
    .bind(&entry.description)
    .bind(changes_json)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Filters for the audit query API
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ActivityLogQuery {
    pub action: Option<String>,
    pub table_affected: Option<String>,
    pub record_id: Option<String>,
    pub actor_id: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
}

// 手写 Default：derive 会把 limit 置 0，查询将一条都不返回
impl Default for ActivityLogQuery {
    fn default() -> Self {
        Self {
            action: None,
            table_affected: None,
            record_id: None,
            actor_id: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

fn default_limit() -> i32 {
    50
}

pub async fn list(
    pool: &SqlitePool,
    query: &ActivityLogQuery,
) -> RepoResult<(Vec<ActivityLog>, i64)> {
    // COALESCE-based optional filters keep this a single static statement
    let filter = " FROM activity_log \
         WHERE (?1 IS NULL OR action = ?1) \
           AND (?2 IS NULL OR table_affected = ?2) \
           AND (?3 IS NULL OR record_id = ?3) \
           AND (?4 IS NULL OR actor_id = ?4)";

    let items = sqlx::query_as::<_, ActivityLog>(&format!(
        "SELECT id, actor_id, actor_label, action, table_affected, record_id, description, changes, created_at{filter} ORDER BY id DESC LIMIT ?5 OFFSET ?6",
    ))
    .bind(&query.action)
    .bind(&query.table_affected)
    .bind(&query.record_id)
    .bind(&query.actor_id)
    .bind(query.limit)
    .bind(query.offset)
    .fetch_all(pool)
    .await?;

    let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*){filter}"))
        .bind(&query.action)
        .bind(&query.table_affected)
        .bind(&query.record_id)
        .bind(&query.actor_id)
        .fetch_one(pool)
        .await?;

    Ok((items, total))
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
            "CREATE TABLE activity_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                actor_id TEXT NOT NULL,
                actor_label TEXT,
                action TEXT NOT NULL,
                table_affected TEXT NOT NULL,
                record_id TEXT NOT NULL,
                description TEXT NOT NULL,
                changes TEXT,
                created_at INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    fn entry(action: &str, record_id: &str) -> NewActivityLog {
        NewActivityLog {
            actor_id: "emp-1".to_string(),
            actor_label: Some("alice (Order Support)".to_string()),
            action: action.to_string(),
            table_affected: "orders".to_string(),
            record_id: record_id.to_string(),
            description: format!("{action} on order {record_id}"),
            changes: Some(ChangesDiff::new(
                serde_json::json!({"status": "PENDING"}),
                serde_json::json!({"status": "PROCESSING"}),
            )),
        }
    }

    #[test]
    fn default_query_applies_the_standard_page_size() {
        let query = ActivityLogQuery::default();
        assert_eq!(query.limit, 50);
        assert_eq!(query.offset, 0);
    }

    #[tokio::test]
    async fn insert_and_list_round_trip() {
        let pool = test_pool().await;
        insert(&pool, entry("STATUS_CHANGE", "100"), 1000).await.unwrap();
        insert(&pool, entry("CANCEL", "100"), 2000).await.unwrap();
        insert(&pool, entry("CANCEL", "200"), 3000).await.unwrap();

        let (all, total) = list(&pool, &ActivityLogQuery::default()).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(all.len(), 3);
        // Newest first
        assert_eq!(all[0].record_id, "200");

        let (cancels, total) = list(
            &pool,
            &ActivityLogQuery {
                action: Some("CANCEL".to_string()),
                record_id: Some("100".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(total, 1);
        assert_eq!(cancels[0].action, "CANCEL");
        let diff = cancels[0].changes.as_ref().unwrap();
        assert_eq!(diff.before["status"], "PENDING");
    }
}
