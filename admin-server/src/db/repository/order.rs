//! Order Repository
//!
//! Loads orders and their items, and performs the status-guarded
//! conditional update that serializes concurrent transitions. The guard
//! (`WHERE id = ? AND status = ?`) is the sole correctness mechanism for
//! racing Proceed/Cancel calls, so every status write goes through
//! [`update_status_guarded`].

use super::RepoResult;
use shared::models::{Order, OrderItem, OrderItemDetail, OrderStatus};
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(
        "SELECT id, customer_id, status, total_amount, delivery_type, payment_status, created_at, updated_at FROM orders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

pub async fn find_by_status(
    pool: &SqlitePool,
    status: OrderStatus,
    limit: i32,
    offset: i32,
) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT id, customer_id, status, total_amount, delivery_type, payment_status, created_at, updated_at FROM orders WHERE status = ? ORDER BY created_at DESC LIMIT ? OFFSET ?",
    )
    .bind(status)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn items_for_order(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItem>> {
    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, product_id, variation_id, quantity, price_at_purchase FROM order_item WHERE order_id = ?",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Items with product/variation display names for every order in a status.
/// Grouped into [`shared::models::OrderSummary`] by the caller.
pub async fn item_details_by_status(
    pool: &SqlitePool,
    status: OrderStatus,
) -> RepoResult<Vec<OrderItemDetail>> {
    let details = sqlx::query_as::<_, OrderItemDetail>(
        "SELECT oi.order_id, oi.product_id, oi.variation_id, oi.quantity, oi.price_at_purchase, p.name AS product_name, pv.name AS variation_name \
         FROM order_item oi \
         JOIN orders o ON o.id = oi.order_id \
         JOIN product p ON p.id = oi.product_id \
         LEFT JOIN product_variation pv ON pv.id = oi.variation_id \
         WHERE o.status = ? \
         ORDER BY oi.order_id, oi.id",
    )
    .bind(status)
    .fetch_all(pool)
    .await?;
    Ok(details)
}

/// Optimistic conditional status update.
///
/// Writes `next` only if the stored status still equals `expected` and
/// returns whether a row was affected. A `false` return means another
/// actor transitioned the order in between.
pub async fn update_status_guarded<'e, E>(
    executor: E,
    id: i64,
    expected: OrderStatus,
    next: OrderStatus,
    now: i64,
) -> RepoResult<bool>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let rows = sqlx::query("UPDATE orders SET status = ?, updated_at = ? WHERE id = ? AND status = ?")
        .bind(next)
        .bind(now)
        .bind(id)
        .bind(expected)
        .execute(executor)
        .await?;
    Ok(rows.rows_affected() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory pool with the orders schema
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE orders (
                id INTEGER PRIMARY KEY,
                customer_id INTEGER NOT NULL,
                status TEXT NOT NULL DEFAULT 'PENDING',
                total_amount REAL NOT NULL DEFAULT 0,
                delivery_type TEXT,
                payment_status TEXT NOT NULL DEFAULT 'UNPAID',
                created_at INTEGER NOT NULL DEFAULT 0,
                updated_at INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    async fn insert_order(pool: &SqlitePool, id: i64, status: OrderStatus) {
        sqlx::query(
            "INSERT INTO orders (id, customer_id, status, total_amount, payment_status) VALUES (?, 1, ?, 50.0, 'PAID')",
        )
        .bind(id)
        .bind(status)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn guarded_update_applies_when_status_matches() {
        let pool = test_pool().await;
        insert_order(&pool, 1, OrderStatus::Pending).await;

        let updated = update_status_guarded(&pool, 1, OrderStatus::Pending, OrderStatus::Processing, 1000)
            .await
            .unwrap();
        assert!(updated);

        let order = find_by_id(&pool, 1).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.updated_at, 1000);
    }

    #[tokio::test]
    async fn guarded_update_rejects_stale_expected_status() {
        let pool = test_pool().await;
        insert_order(&pool, 1, OrderStatus::Pending).await;

        // First writer wins
        assert!(
            update_status_guarded(&pool, 1, OrderStatus::Pending, OrderStatus::Processing, 1000)
                .await
                .unwrap()
        );

        // Second writer still believes the order is Pending — must lose
        let updated = update_status_guarded(&pool, 1, OrderStatus::Pending, OrderStatus::Processing, 2000)
            .await
            .unwrap();
        assert!(!updated);

        // And the stored state is untouched by the losing write
        let order = find_by_id(&pool, 1).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.updated_at, 1000);
    }

    #[tokio::test]
    async fn guarded_update_missing_order_affects_no_rows() {
        let pool = test_pool().await;
        let updated = update_status_guarded(&pool, 99, OrderStatus::Pending, OrderStatus::Processing, 1000)
            .await
            .unwrap();
        assert!(!updated);
    }
}
