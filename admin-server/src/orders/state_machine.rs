//! Order State Machine
//!
//! Pure transition validation over the fulfillment status enum. No
//! storage access here; the service layer persists whatever this module
//! approves.
//!
//! ```text
//! Pending → Processing → Shipping → Delivery → Received → Completed
//!    └──────────┴───────────┴───────────┘
//!                   Cancel → Cancelled
//! ```
//!
//! Completed and Cancelled are terminal.

use shared::models::OrderStatus;
use thiserror::Error;

/// Events an actor can apply to an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEvent {
    /// Advance one step along the fulfillment chain
    Proceed,
    /// Cancel and restore stock
    Cancel,
}

/// Rejected transition — the event is illegal from the current status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{event:?} is not allowed from status {from}")]
pub struct InvalidTransition {
    pub from: OrderStatus,
    pub event: OrderEvent,
}

/// Validate `event` against `current`, returning the next status.
pub fn validate(current: OrderStatus, event: OrderEvent) -> Result<OrderStatus, InvalidTransition> {
    let rejected = InvalidTransition {
        from: current,
        event,
    };

    match event {
        OrderEvent::Proceed => match current {
            OrderStatus::Pending => Ok(OrderStatus::Processing),
            OrderStatus::Processing => Ok(OrderStatus::Shipping),
            OrderStatus::Shipping => Ok(OrderStatus::Delivery),
            OrderStatus::Delivery => Ok(OrderStatus::Received),
            OrderStatus::Received => Ok(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled => Err(rejected),
        },
        OrderEvent::Cancel => match current {
            OrderStatus::Pending
            | OrderStatus::Processing
            | OrderStatus::Shipping
            | OrderStatus::Delivery => Ok(OrderStatus::Cancelled),
            OrderStatus::Received | OrderStatus::Completed | OrderStatus::Cancelled => {
                Err(rejected)
            }
        },
    }
}
