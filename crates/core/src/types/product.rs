//! Product and category domain model.
//!
//! These types mirror the documents the storefront persists to client
//! storage, so field names serialize in camelCase and absent optional fields
//! are omitted entirely. Prices are decimal USD amounts encoded as JSON
//! numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};

/// Merchandising badge shown on product cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "Best Seller")]
    BestSeller,
    New,
    Limited,
}

/// A shopping category shown on the home page grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique slug identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image: String,
}

/// A catalog product.
///
/// Immutable from the commerce engine's perspective: stores and pricing only
/// ever read products by reference or id, never mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique id/slug.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in USD (sale/current price).
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Optional "compare at" price (original price) for sale anchoring.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub compare_at_price: Option<Decimal>,
    /// Rating out of 5.
    pub rating: f32,
    /// Thumbnail image URL.
    pub image: String,
    /// Optional UI badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// Category id reference.
    pub category_id: CategoryId,
    /// Optional short product description for quick view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional stock count for scarcity messaging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}
