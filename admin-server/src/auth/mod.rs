//! 认证授权模块
//!
//! 提供 JWT 认证、权限解析和中间件：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文
//! - [`PermissionGate`] / [`CapabilitySet`] - 权限解析
//! - [`require_auth`] / [`resolve_capabilities`] - 请求中间件

pub mod gate;
pub mod jwt;
pub mod middleware;
pub mod permissions;

pub use gate::{CapabilitySet, PermissionGate};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_auth, require_permission, resolve_capabilities};
