//! Shared data types for the storefront administration backend.
//!
//! Pure model definitions and small helpers used by the admin server.
//! Database derives are gated behind the `db` feature so non-server
//! consumers do not pull in sqlx.

pub mod models;
pub mod util;

pub use models::{
    ActivityLog, ChangesDiff, Order, OrderItem, OrderItemDetail, OrderStatus, OrderSummary,
    Product, ProductVariation, Role, UserPermission,
};
