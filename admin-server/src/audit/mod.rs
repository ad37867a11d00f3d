//! 审计模块 (审计日志写入与查询)

pub mod diff;
pub mod service;
pub mod types;

pub use diff::snapshot_diff;
pub use service::AuditService;
pub use types::AuditAction;
