//! Stock Ledger
//!
//! Authoritative inventory counters for products and product variations.
//!
//! Policy: an item that carries a `variation_id` adjusts **both** the
//! variation quantity and the parent product's stock; an item without one
//! adjusts the product only. Deductions clamp at zero inside the UPDATE
//! statement itself (`MAX(0, ...)`) so a counter can never go negative,
//! and every adjustment is a single atomic read-modify-write — no
//! read-then-write round trips that could lose updates under concurrent
//! cancellations touching the same product.
//!
//! Callers pass a transaction connection; reserve/release never commit.

use super::{RepoError, RepoResult};
use shared::models::OrderItem;
use sqlx::SqliteConnection;

/// One inventory adjustment, derived from an order item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAdjustment {
    pub product_id: i64,
    pub variation_id: Option<i64>,
    pub quantity: i64,
}

impl From<&OrderItem> for StockAdjustment {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            variation_id: item.variation_id,
            quantity: item.quantity,
        }
    }
}

/// Result of a reservation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveOutcome {
    Reserved,
    /// Names the first counter that could not cover the requested quantity
    InsufficientStock {
        product_id: i64,
        variation_id: Option<i64>,
    },
}

fn validate_quantity(adjustment: &StockAdjustment) -> RepoResult<()> {
    if adjustment.quantity <= 0 {
        return Err(RepoError::Validation(format!(
            "Adjustment quantity must be positive, got {} for product {}",
            adjustment.quantity, adjustment.product_id
        )));
    }
    Ok(())
}

/// Restore stock for the given items (order cancellation).
///
/// The caller is responsible for invoking this exactly once per order —
/// the status-guarded update in the same transaction is what enforces
/// that under concurrent cancels.
pub async fn release(conn: &mut SqliteConnection, items: &[StockAdjustment]) -> RepoResult<()> {
    for item in items {
        validate_quantity(item)?;

        sqlx::query("UPDATE product SET stock_quantity = stock_quantity + ? WHERE id = ?")
            .bind(item.quantity)
            .bind(item.product_id)
            .execute(&mut *conn)
            .await?;

        if let Some(variation_id) = item.variation_id {
            sqlx::query("UPDATE product_variation SET quantity = quantity + ? WHERE id = ?")
                .bind(item.quantity)
                .bind(variation_id)
                .execute(&mut *conn)
                .await?;
        }
    }
    Ok(())
}

/// Reserve stock for the given items (external checkout flow).
///
/// Availability is validated first; on a shortfall the failing counter is
/// reported and nothing is deducted (the caller rolls the transaction
/// back). The deduction itself clamps at zero rather than erroring, so a
/// concurrent deduction racing past the check can never drive a counter
/// negative.
pub async fn reserve(
    conn: &mut SqliteConnection,
    items: &[StockAdjustment],
) -> RepoResult<ReserveOutcome> {
    // Validation pass
    for item in items {
        validate_quantity(item)?;

        let available: Option<i64> =
            sqlx::query_scalar("SELECT stock_quantity FROM product WHERE id = ?")
                .bind(item.product_id)
                .fetch_optional(&mut *conn)
                .await?;
        let available = available.ok_or_else(|| {
            RepoError::NotFound(format!("Product {} not found", item.product_id))
        })?;
        if available < item.quantity {
            return Ok(ReserveOutcome::InsufficientStock {
                product_id: item.product_id,
                variation_id: None,
            });
        }

        if let Some(variation_id) = item.variation_id {
            let available: Option<i64> =
                sqlx::query_scalar("SELECT quantity FROM product_variation WHERE id = ?")
                    .bind(variation_id)
                    .fetch_optional(&mut *conn)
                    .await?;
            let available = available.ok_or_else(|| {
                RepoError::NotFound(format!("Variation {variation_id} not found"))
            })?;
            if available < item.quantity {
                return Ok(ReserveOutcome::InsufficientStock {
                    product_id: item.product_id,
                    variation_id: Some(variation_id),
                });
            }
        }
    }

    // Deduction pass — clamped at zero
    for item in items {
        sqlx::query("UPDATE product SET stock_quantity = MAX(0, stock_quantity - ?) WHERE id = ?")
            .bind(item.quantity)
            .bind(item.product_id)
            .execute(&mut *conn)
            .await?;

        if let Some(variation_id) = item.variation_id {
            sqlx::query("UPDATE product_variation SET quantity = MAX(0, quantity - ?) WHERE id = ?")
                .bind(item.quantity)
                .bind(variation_id)
                .execute(&mut *conn)
                .await?;
        }
    }

    Ok(ReserveOutcome::Reserved)
}
