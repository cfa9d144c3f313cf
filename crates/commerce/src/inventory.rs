//! Per-category low-stock threshold configuration and helpers.
//!
//! Calibrates urgency messaging per category. Pure lookup; nothing here
//! mutates or tracks inventory.

use high_country_core::CategoryId;

/// Fallback threshold used for unknown or absent categories.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Calibrated low-stock threshold (inclusive) for a category.
///
/// Tuned to category velocity and replenishment patterns: softgoods juggle
/// more sizes and variants, hydration runs deeper inventory but customers
/// value the scarcity cue.
#[must_use]
pub fn low_stock_threshold(category_id: Option<&CategoryId>) -> u32 {
    let Some(category_id) = category_id else {
        return DEFAULT_LOW_STOCK_THRESHOLD;
    };
    match category_id.as_str() {
        // Lighting and hardgoods
        "knives" => 3,
        "multi-tools" => 4,
        "headlamps" | "cookware" => 5,

        // Softgoods
        "base-layers" => 7,
        "hiking-socks" => 8,
        "gloves" | "hats" => 6,

        // Hydration
        "water-bottles" => 6,

        _ => DEFAULT_LOW_STOCK_THRESHOLD,
    }
}

/// Whether the given stock count qualifies as low stock.
///
/// Only triggers when stock is known and positive: out-of-stock is a
/// distinct state, not "low".
#[must_use]
pub fn is_low_stock(stock: Option<u32>, category_id: Option<&CategoryId>) -> bool {
    match stock {
        None | Some(0) => false,
        Some(count) => count <= low_stock_threshold(category_id),
    }
}
