//! Order Service
//!
//! Orchestrates the permission gate, state machine, stock ledger and
//! audit log into the three order use cases: Proceed, Cancel and
//! ListByStatus. This is the only module that writes order state.
//!
//! Concurrency: transitions are serialized by the optimistic
//! status-guarded update. Cancel performs its stock restoration and the
//! status flip in one transaction, so a lost race (or a crash between
//! the two) can never leave stock half-restored — and stock for a given
//! order is therefore released exactly once, ever.

use std::collections::HashMap;

use sqlx::SqlitePool;
use thiserror::Error;

use super::state_machine::{self, InvalidTransition, OrderEvent};
use super::view::RoleView;
use crate::audit::{AuditAction, AuditService, snapshot_diff};
use crate::auth::{CapabilitySet, CurrentUser};
use crate::db::repository::stock::StockAdjustment;
use crate::db::repository::{RepoError, order, stock};
use shared::models::{Order, OrderItemDetail, OrderStatus, OrderSummary};

/// Error surface of the order use cases
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Order {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    #[error("Order was modified by another operator")]
    ConcurrentModification,

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl From<RepoError> for OrderError {
    fn from(err: RepoError) -> Self {
        OrderError::OperationFailed(err.to_string())
    }
}

/// Minimal status snapshot serialized into audit diffs
#[derive(serde::Serialize)]
struct StatusSnapshot {
    status: OrderStatus,
}

/// Order lifecycle orchestration
#[derive(Debug, Clone)]
pub struct OrderService {
    pool: SqlitePool,
    audit: AuditService,
}

impl OrderService {
    pub fn new(pool: SqlitePool, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    /// Advance an order one step along the fulfillment chain.
    ///
    /// Returns the new status. The permission key is the status screen
    /// the operator is acting from, so the gate runs right after the
    /// load and before transition validation — an unauthorized caller
    /// learns nothing about the order's state.
    pub async fn proceed(
        &self,
        order_id: i64,
        actor: &CurrentUser,
        view: &RoleView,
        caps: &CapabilitySet,
    ) -> Result<OrderStatus, OrderError> {
        let order = self.load(order_id).await?;
        self.check_permission(caps, view.screen_permission(order.status))?;
        let next = state_machine::validate(order.status, OrderEvent::Proceed)?;

        let updated = order::update_status_guarded(
            &self.pool,
            order_id,
            order.status,
            next,
            shared::util::now_millis(),
        )
        .await?;
        if !updated {
            return Err(OrderError::ConcurrentModification);
        }

        // Best-effort audit after the commit
        self.audit
            .record(
                AuditAction::StatusChange,
                "orders",
                &order_id.to_string(),
                &actor.id,
                Some(view.actor_label(actor)),
                view.describe(format!(
                    "advanced order #{order_id} from {} to {next}",
                    order.status
                )),
                Some(snapshot_diff(
                    &StatusSnapshot { status: order.status },
                    &StatusSnapshot { status: next },
                )),
            )
            .await;

        Ok(next)
    }

    /// Cancel an order and restore stock for every item.
    ///
    /// Stock restoration and the status flip are one atomic unit: either
    /// both apply or neither does. The status guard inside the
    /// transaction is what makes the restoration exactly-once under
    /// concurrent cancel attempts.
    pub async fn cancel(
        &self,
        order_id: i64,
        actor: &CurrentUser,
        view: &RoleView,
        caps: &CapabilitySet,
    ) -> Result<(), OrderError> {
        let order = self.load(order_id).await?;
        self.check_permission(caps, view.screen_permission(order.status))?;
        let next = state_machine::validate(order.status, OrderEvent::Cancel)?;

        let items = order::items_for_order(&self.pool, order_id).await?;
        let adjustments: Vec<StockAdjustment> = items.iter().map(StockAdjustment::from).collect();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| OrderError::OperationFailed(e.to_string()))?;

        stock::release(&mut *tx, &adjustments).await?;
        let updated = order::update_status_guarded(
            &mut *tx,
            order_id,
            order.status,
            next,
            shared::util::now_millis(),
        )
        .await?;
        if !updated {
            // Lost the race: roll the stock restoration back too
            tx.rollback()
                .await
                .map_err(|e| OrderError::OperationFailed(e.to_string()))?;
            return Err(OrderError::ConcurrentModification);
        }
        tx.commit()
            .await
            .map_err(|e| OrderError::OperationFailed(e.to_string()))?;

        let restored: i64 = adjustments.iter().map(|a| a.quantity).sum();
        self.audit
            .record(
                AuditAction::Cancel,
                "orders",
                &order_id.to_string(),
                &actor.id,
                Some(view.actor_label(actor)),
                view.describe(format!(
                    "cancelled order #{order_id} from {}, restored {restored} unit(s) across {} item(s)",
                    order.status,
                    adjustments.len()
                )),
                Some(snapshot_diff(
                    &StatusSnapshot { status: order.status },
                    &StatusSnapshot { status: next },
                )),
            )
            .await;

        Ok(())
    }

    /// Read-only status screen: orders with items and display names.
    /// No mutation, no audit entry.
    pub async fn list_by_status(
        &self,
        status: OrderStatus,
        view: &RoleView,
        caps: &CapabilitySet,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        self.check_permission(caps, view.screen_permission(status))?;

        let orders = order::find_by_status(&self.pool, status, limit, offset).await?;
        let details = order::item_details_by_status(&self.pool, status).await?;

        let mut by_order: HashMap<i64, Vec<OrderItemDetail>> = HashMap::new();
        for detail in details {
            by_order.entry(detail.order_id).or_default().push(detail);
        }

        Ok(orders
            .into_iter()
            .map(|o| {
                let items = by_order.remove(&o.id).unwrap_or_default();
                OrderSummary::from_order(o, items)
            })
            .collect())
    }

    async fn load(&self, order_id: i64) -> Result<Order, OrderError> {
        order::find_by_id(&self.pool, order_id)
            .await?
            .ok_or(OrderError::NotFound(order_id))
    }

    fn check_permission(&self, caps: &CapabilitySet, key: &str) -> Result<(), OrderError> {
        if caps.allows(key) {
            Ok(())
        } else {
            Err(OrderError::PermissionDenied(key.to_string()))
        }
    }
}
