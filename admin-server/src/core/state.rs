//! Server State
//!
//! 应用级共享状态：连接池与各业务服务。`Clone` 是浅拷贝 ——
//! 池和服务内部都是引用计数。

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::audit::AuditService;
use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::orders::OrderService;
use crate::utils::AppError;

/// 服务器共享状态
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
    pub audit_service: AuditService,
    pub order_service: OrderService,
}

impl ServerState {
    /// 初始化：打开数据库 (含迁移)，装配各服务
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::with_pool(config.clone(), db.pool))
    }

    /// 用现成的池装配状态（测试使用内存池）
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let audit_service = AuditService::new(pool.clone());
        let order_service = OrderService::new(pool.clone(), audit_service.clone());

        Self {
            config,
            pool,
            jwt_service,
            audit_service,
            order_service,
        }
    }
}
