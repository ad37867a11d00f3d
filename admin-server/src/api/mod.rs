//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employee_orders`] - 订单状态屏与生命周期操作 (五个角色命名空间)
//! - [`audit_log`] - 审计日志查询

pub mod audit_log;
pub mod employee_orders;
pub mod health;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
