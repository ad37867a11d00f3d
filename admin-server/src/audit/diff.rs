//! 结构化 before/after 差异

use serde::Serialize;
use shared::models::ChangesDiff;

/// Build a structured diff from two serializable snapshots.
///
/// Serialization failures degrade to `null` — the audit write is
/// best-effort and must not fail the caller.
pub fn snapshot_diff<B: Serialize, A: Serialize>(before: &B, after: &A) -> ChangesDiff {
    ChangesDiff::new(
        serde_json::to_value(before).unwrap_or(serde_json::Value::Null),
        serde_json::to_value(after).unwrap_or(serde_json::Value::Null),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_both_sides() {
        let diff = snapshot_diff(
            &serde_json::json!({"status": "PENDING"}),
            &serde_json::json!({"status": "CANCELLED"}),
        );
        assert_eq!(diff.before["status"], "PENDING");
        assert_eq!(diff.after["status"], "CANCELLED");
    }
}
