//! Permission Definitions
//!
//! 权限键设计：每个订单状态页一个键（查看该页 = 可执行该页上的操作），
//! 外加审计日志查询权限。角色默认权限为后备，按用户的 override 记录优先。

use shared::models::{OrderStatus, Role};

/// 可配置权限列表（订单状态页 7 项 + 审计 1 项）
pub const ALL_PERMISSIONS: &[&str] = &[
    "orders_orders_pending",
    "orders_orders_processing",
    "orders_orders_shipping",
    "orders_orders_delivery",
    "orders_orders_received",
    "orders_orders_completed",
    "orders_orders_cancelled",
    "audit_logs_view",
];

/// Admin 专属权限
pub const ADMIN_ONLY_PERMISSIONS: &[&str] = &["all"];

/// Default role permissions
pub const DEFAULT_ADMIN_PERMISSIONS: &[&str] = &["all"];

/// 订单客服：全部订单状态页
pub const DEFAULT_ORDER_SUPPORT_PERMISSIONS: &[&str] = &[
    "orders_orders_pending",
    "orders_orders_processing",
    "orders_orders_shipping",
    "orders_orders_delivery",
    "orders_orders_received",
    "orders_orders_completed",
    "orders_orders_cancelled",
];

/// 库存管理员：履约前段（扣减库存相关的状态页）
pub const DEFAULT_INVENTORY_MANAGER_PERMISSIONS: &[&str] = &[
    "orders_orders_pending",
    "orders_orders_processing",
    "orders_orders_shipping",
];

/// 交易管理员：终态页（对账）
pub const DEFAULT_TRANSACTION_MANAGER_PERMISSIONS: &[&str] = &[
    "orders_orders_completed",
    "orders_orders_cancelled",
];

/// 用户管理员：默认无订单权限（按用户 override 单独授权）
pub const DEFAULT_USER_MANAGER_PERMISSIONS: &[&str] = &[];

/// Permission key gating the status screen (and the Proceed/Cancel
/// actions performed from it), e.g. `orders_orders_pending`.
pub fn order_screen_permission(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "orders_orders_pending",
        OrderStatus::Processing => "orders_orders_processing",
        OrderStatus::Shipping => "orders_orders_shipping",
        OrderStatus::Delivery => "orders_orders_delivery",
        OrderStatus::Received => "orders_orders_received",
        OrderStatus::Completed => "orders_orders_completed",
        OrderStatus::Cancelled => "orders_orders_cancelled",
    }
}

/// Get default permissions for a role
pub fn get_default_permissions(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => DEFAULT_ADMIN_PERMISSIONS,
        Role::OrderSupport => DEFAULT_ORDER_SUPPORT_PERMISSIONS,
        Role::InventoryManager => DEFAULT_INVENTORY_MANAGER_PERMISSIONS,
        Role::TransactionManager => DEFAULT_TRANSACTION_MANAGER_PERMISSIONS,
        Role::UserManager => DEFAULT_USER_MANAGER_PERMISSIONS,
    }
}

/// Validate if a permission string is valid
pub fn is_valid_permission(permission: &str) -> bool {
    ALL_PERMISSIONS.contains(&permission) || ADMIN_ONLY_PERMISSIONS.contains(&permission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_screen_key_is_registered() {
        for status in OrderStatus::ALL {
            assert!(is_valid_permission(order_screen_permission(*status)));
        }
    }

    #[test]
    fn role_defaults_only_contain_known_keys() {
        for role in Role::ALL {
            for key in get_default_permissions(*role) {
                assert!(is_valid_permission(key), "unknown key {key} for {role:?}");
            }
        }
    }
}
