//! 审计日志服务
//!
//! `AuditService` 是审计日志的入口：
//! - 写入：业务变更提交之后调用，best-effort（失败只记录运维日志，
//!   绝不让业务操作报错）
//! - 查询：审计 API 直接读取 activity_log 表
//!
//! 写入是同步的 —— 本服务按请求执行、无后台任务，
//! 日志条目在请求内落盘或丢弃。

use sqlx::SqlitePool;

use super::types::AuditAction;
use crate::db::repository::activity_log::{self, ActivityLogQuery, NewActivityLog};
use crate::db::repository::RepoResult;
use shared::models::{ActivityLog, ChangesDiff};

/// 审计日志服务
#[derive(Debug, Clone)]
pub struct AuditService {
    pool: SqlitePool,
}

impl AuditService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record one audit entry. Never fails from the caller's view:
    /// storage errors are logged to the operational `audit` target and
    /// swallowed, because the business mutation already committed.
    pub async fn record(
        &self,
        action: AuditAction,
        table_affected: &str,
        record_id: &str,
        actor_id: &str,
        actor_label: Option<String>,
        description: String,
        changes: Option<ChangesDiff>,
    ) {
        let entry = NewActivityLog {
            actor_id: actor_id.to_string(),
            actor_label,
            action: action.as_str().to_string(),
            table_affected: table_affected.to_string(),
            record_id: record_id.to_string(),
            description,
            changes,
        };

        match activity_log::insert(&self.pool, entry, shared::util::now_millis()).await {
            Ok(id) => {
                tracing::debug!(
                    target: "audit",
                    audit_id = id,
                    action = %action,
                    record_id,
                    "Audit entry recorded"
                );
            }
            Err(e) => {
                tracing::error!(
                    target: "audit",
                    action = %action,
                    record_id,
                    error = %e,
                    "Failed to write audit entry"
                );
            }
        }
    }

    /// 查询审计日志（审计 API 使用）
    pub async fn query(&self, query: &ActivityLogQuery) -> RepoResult<(Vec<ActivityLog>, i64)> {
        activity_log::list(&self.pool, query).await
    }
}
