//! Admin Server - 订单生命周期与库存对账引擎
//!
//! # 架构概述
//!
//! 多角色电商后台的订单管理服务：
//!
//! - **订单生命周期** (`orders`): 纯函数状态机 + 乐观并发守卫
//! - **库存对账** (`db/repository/stock`): 取消返还、原子钳制扣减
//! - **认证授权** (`auth`): JWT 验证 + 角色默认/按用户覆盖的能力解析
//! - **审计日志** (`audit`): 同步 best-effort 变更记录
//! - **HTTP API** (`api`): 五个角色命名空间共用的参数化路由面
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、权限
//! ├── orders/        # 状态机、角色视图、编排服务
//! ├── audit/         # 审计日志
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 连接池、迁移、仓储
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod audit;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use auth::{CapabilitySet, CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use orders::{OrderError, OrderService, RoleView};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境：加载 .env 并初始化日志
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
