//! 审计日志类型定义
//!
//! 每个变更操作对应一条不可变的 activity_log 记录。

use serde::{Deserialize, Serialize};

/// 审计操作类型（枚举，非自由文本）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    /// 订单状态推进
    StatusChange,
    /// 订单取消（含库存恢复）
    Cancel,
}

impl AuditAction {
    /// Stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::StatusChange => "STATUS_CHANGE",
            AuditAction::Cancel => "CANCEL",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
