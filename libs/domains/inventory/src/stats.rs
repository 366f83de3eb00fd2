//! Aggregation over product snapshots
//!
//! Pure functions for dashboard statistics. These operate on a
//! caller-supplied snapshot and never touch the store.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Product, StockLevel};

/// Summary statistics derived from a product snapshot
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    /// Number of products in the catalog
    pub total_products: usize,
    /// Products with stock above zero but at or below their threshold
    pub low_stock_count: usize,
    /// Products with zero stock
    pub out_of_stock_count: usize,
    /// Sum of price times stock over all products
    pub total_value: f64,
}

/// Derive summary statistics from a product snapshot
///
/// Out-of-stock products are not counted as low stock; "low" requires
/// stock above zero.
pub fn summarize(products: &[Product]) -> InventorySummary {
    InventorySummary {
        total_products: products.len(),
        low_stock_count: products
            .iter()
            .filter(|p| p.stock_level() == StockLevel::Low)
            .count(),
        out_of_stock_count: products.iter().filter(|p| p.current_stock == 0).count(),
        total_value: products.iter().map(|p| p.inventory_value()).sum(),
    }
}

/// Products at or below their threshold, most depleted first
///
/// Unlike the low-stock count, this list includes products with zero
/// stock. The sort is stable: ties keep their snapshot order. The result
/// is truncated to `limit`.
pub fn low_stock_list(products: &[Product], limit: usize) -> Vec<Product> {
    let mut list: Vec<Product> = products
        .iter()
        .filter(|p| p.current_stock <= p.low_stock_threshold)
        .cloned()
        .collect();
    list.sort_by_key(|p| p.current_stock);
    list.truncate(limit);
    list
}
