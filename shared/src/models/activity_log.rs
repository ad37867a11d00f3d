//! Activity Log Model (审计日志)
//!
//! Append-only record of every mutating action. Advisory — the business
//! tables stay authoritative even if a log write is lost.

use serde::{Deserialize, Serialize};

/// Structured before/after snapshot attached to a log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangesDiff {
    pub before: serde_json::Value,
    pub after: serde_json::Value,
}

impl ChangesDiff {
    pub fn new(before: serde_json::Value, after: serde_json::Value) -> Self {
        Self { before, after }
    }
}

/// One audit trail entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ActivityLog {
    pub id: i64,
    /// Employee ID of the actor
    pub actor_id: String,
    /// Human-readable actor description ("alice (Order Support)")
    pub actor_label: Option<String>,
    /// Action type, e.g. "STATUS_CHANGE", "CANCEL"
    pub action: String,
    pub table_affected: String,
    pub record_id: String,
    pub description: String,
    /// Structured before/after diff, stored as JSON
    #[cfg_attr(feature = "db", sqlx(json(nullable)))]
    pub changes: Option<ChangesDiff>,
    /// Unix millis
    pub created_at: i64,
}
