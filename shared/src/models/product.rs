//! Product Model (商品库存)

use serde::{Deserialize, Serialize};

/// Product entity — `stock_quantity` is the authoritative counter for
/// items sold without a variation, and the aggregate counter for items
/// sold with one. Never negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub stock_quantity: i64,
    pub is_active: bool,
}

/// Product variation (e.g. size/color) with its own stock counter.
/// Never negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductVariation {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub quantity: i64,
    pub is_active: bool,
}
