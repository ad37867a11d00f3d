//! 订单生命周期模块
//!
//! 状态机 (纯函数) + 角色视图 + 编排服务。

pub mod service;
pub mod state_machine;
pub mod view;

pub use service::{OrderError, OrderService};
pub use state_machine::{InvalidTransition, OrderEvent};
pub use view::RoleView;
