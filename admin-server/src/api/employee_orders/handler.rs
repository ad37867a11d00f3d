//! Employee Orders API Handlers
//!
//! 路径段解析 (role / status / order_id) + OrderService 调用。
//! 能力集合来自 resolve_capabilities 中间件注入的请求扩展。

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::auth::{CapabilitySet, CurrentUser};
use crate::core::ServerState;
use crate::orders::RoleView;
use crate::utils::{AppError, AppResult};
use shared::models::{OrderStatus, OrderSummary, Role};

/// 生命周期操作响应
#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub success: bool,
    pub message: String,
}

/// 列表分页参数
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
}

fn default_limit() -> i32 {
    50
}

fn parse_role(segment: &str) -> Result<RoleView, AppError> {
    Role::parse(segment)
        .map(RoleView::new)
        .ok_or_else(|| AppError::not_found(format!("Unknown employee namespace: {segment}")))
}

fn parse_status(segment: &str) -> Result<OrderStatus, AppError> {
    OrderStatus::from_slug(segment)
        .ok_or_else(|| AppError::not_found(format!("Unknown order status: {segment}")))
}

/// GET /Employee/{role}/Orders/{status} — 状态屏订单列表
pub async fn list(
    State(state): State<ServerState>,
    Path((role, status)): Path<(String, String)>,
    Query(query): Query<ListQuery>,
    Extension(user): Extension<CurrentUser>,
    Extension(caps): Extension<CapabilitySet>,
) -> AppResult<Json<Vec<OrderSummary>>> {
    let view = parse_role(&role)?;
    let status = parse_status(&status)?;

    tracing::debug!(
        target: "orders",
        user_id = %user.id,
        namespace = %view.role(),
        status = %status,
        "Order status screen requested"
    );

    let orders = state
        .order_service
        .list_by_status(status, &view, &caps, query.limit, query.offset)
        .await?;
    Ok(Json(orders))
}

/// POST /Employee/{role}/Orders/{status}/Proceed/{order_id} — 推进一步
///
/// 路径中的 {status} 是操作者所在的屏幕；守卫以订单的当前状态为准，
/// 屏幕过期时操作以 409 失败。
pub async fn proceed(
    State(state): State<ServerState>,
    Path((role, status, order_id)): Path<(String, String, i64)>,
    Extension(user): Extension<CurrentUser>,
    Extension(caps): Extension<CapabilitySet>,
) -> AppResult<Json<TransitionResponse>> {
    let view = parse_role(&role)?;
    parse_status(&status)?;

    let next = state
        .order_service
        .proceed(order_id, &user, &view, &caps)
        .await?;

    Ok(Json(TransitionResponse {
        success: true,
        message: format!("Order {order_id} advanced to {next}"),
    }))
}

/// POST /Employee/{role}/Orders/{status}/Cancel/{order_id} — 取消并返还库存
pub async fn cancel(
    State(state): State<ServerState>,
    Path((role, status, order_id)): Path<(String, String, i64)>,
    Extension(user): Extension<CurrentUser>,
    Extension(caps): Extension<CapabilitySet>,
) -> AppResult<Json<TransitionResponse>> {
    let view = parse_role(&role)?;
    parse_status(&status)?;

    state
        .order_service
        .cancel(order_id, &user, &view, &caps)
        .await?;

    Ok(Json(TransitionResponse {
        success: true,
        message: format!("Order {order_id} cancelled and stock restored"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_segment_is_case_insensitive() {
        assert!(parse_role("OrderSupport").is_ok());
        assert!(parse_role("ordersupport").is_ok());
        assert!(parse_role("Superuser").is_err());
    }

    #[test]
    fn status_segment_uses_slugs() {
        assert_eq!(parse_status("pending").unwrap(), OrderStatus::Pending);
        assert_eq!(parse_status("CANCELLED").unwrap(), OrderStatus::Cancelled);
        assert!(parse_status("archived").is_err());
    }
}
