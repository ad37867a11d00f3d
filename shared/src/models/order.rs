//! Order Model (订单)
//!
//! Orders are created by the external checkout flow with stock already
//! reserved. The admin server only ever transitions them; they are never
//! hard-deleted.

use serde::{Deserialize, Serialize};

/// Order fulfillment status
///
/// Stored as SCREAMING_SNAKE_CASE text. `Completed` and `Cancelled` are
/// terminal — no transition leaves either state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipping,
    Delivery,
    Received,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in fulfillment order (terminal states last)
    pub const ALL: &[OrderStatus] = &[
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipping,
        OrderStatus::Delivery,
        OrderStatus::Received,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipping => "SHIPPING",
            OrderStatus::Delivery => "DELIVERY",
            OrderStatus::Received => "RECEIVED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Lowercase form used in URL segments and permission keys
    pub fn slug(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Delivery => "delivery",
            OrderStatus::Received => "received",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a URL path segment (case-insensitive)
    pub fn from_slug(segment: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.slug().eq_ignore_ascii_case(segment))
    }

    /// Terminal states admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub status: OrderStatus,
    pub total_amount: f64,
    /// Delivery method chosen at checkout (e.g. "COURIER", "PICKUP")
    pub delivery_type: Option<String>,
    /// Payment state owned by the external payment flow
    pub payment_status: String,
    /// Unix millis
    pub created_at: i64,
    /// Unix millis
    pub updated_at: i64,
}

/// Order line item — immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    /// Set when the customer picked a specific variation
    pub variation_id: Option<i64>,
    pub quantity: i64,
    pub price_at_purchase: f64,
}

// =============================================================================
// Read DTOs (list projection)
// =============================================================================

/// Line item enriched with product/variation display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItemDetail {
    pub order_id: i64,
    pub product_id: i64,
    pub variation_id: Option<i64>,
    pub quantity: i64,
    pub price_at_purchase: f64,
    pub product_name: String,
    pub variation_name: Option<String>,
}

/// Order with joined items, as returned by the status list screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: i64,
    pub customer_id: i64,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub delivery_type: Option<String>,
    pub payment_status: String,
    pub created_at: i64,
    pub items: Vec<OrderItemDetail>,
}

impl OrderSummary {
    pub fn from_order(order: Order, items: Vec<OrderItemDetail>) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            status: order.status,
            total_amount: order.total_amount,
            delivery_type: order.delivery_type,
            payment_status: order.payment_status,
            created_at: order.created_at,
            items,
        }
    }
}
