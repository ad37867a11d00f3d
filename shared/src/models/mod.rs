//! Domain Models
//!
//! Entities persisted by the admin server plus the read DTOs returned by
//! the order list projection.

pub mod activity_log;
pub mod order;
pub mod permission;
pub mod product;
pub mod role;

pub use activity_log::{ActivityLog, ChangesDiff};
pub use order::{Order, OrderItem, OrderItemDetail, OrderStatus, OrderSummary};
pub use permission::UserPermission;
pub use product::{Product, ProductVariation};
pub use role::Role;
