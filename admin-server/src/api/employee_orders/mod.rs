//! Employee Orders API 模块 (订单状态屏与生命周期操作)
//!
//! 一个参数化路由面服务全部五个角色命名空间：
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /Employee/{role}/Orders/{status} | GET | 状态屏订单列表 |
//! | /Employee/{role}/Orders/{status}/Proceed/{order_id} | POST | 推进一步 |
//! | /Employee/{role}/Orders/{status}/Cancel/{order_id} | POST | 取消并返还库存 |
//!
//! 权限不在路由层检查 —— 订单操作的权限键取决于订单的当前状态，
//! 由 OrderService 在读取订单之后判定。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/Employee/{role}/Orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{status}", get(handler::list))
        .route("/{status}/Proceed/{order_id}", post(handler::proceed))
        .route("/{status}/Cancel/{order_id}", post(handler::cancel))
}
