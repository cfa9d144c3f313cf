//! Cart store with persistence.
//!
//! Holds cart lines keyed by product id and provides the
//! add/remove/increment/decrement/clear operations the UI calls. Derived
//! aggregates (total items, subtotal) are recomputed on every read so they
//! can never go stale against the line map.

use std::collections::HashMap;
use std::sync::Arc;

use high_country_core::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing;
use crate::storage::{self, Storage};

/// Storage key for the persisted cart.
pub const CART_STORAGE_KEY: &str = "hcg-cart";

/// A single cart line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product reference.
    pub product: Product,
    /// Quantity in cart; always at least 1. A line that would reach zero is
    /// removed instead of stored.
    pub qty: u32,
}

/// The cart's durable projection: the mutable item map only, never derived
/// values. Derived accessors are reconstructed from the restored map.
#[derive(Debug, Default, Deserialize)]
struct CartProjection {
    #[serde(default)]
    items: HashMap<ProductId, CartLine>,
}

#[derive(Serialize)]
struct CartProjectionRef<'a> {
    items: &'a HashMap<ProductId, CartLine>,
}

/// The canonical owner of cart state.
pub struct CartStore {
    storage: Arc<dyn Storage>,
    items: HashMap<ProductId, CartLine>,
}

impl CartStore {
    /// Restore the cart persisted in `storage`, or start empty.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let CartProjection { items } = storage::restore(&*storage, CART_STORAGE_KEY);
        Self { storage, items }
    }

    /// Add a product to the cart, accumulating onto an existing line.
    ///
    /// `qty` must be a positive count; the quantity stepper in the UI floors
    /// at 1 and the store does not clamp on its behalf.
    pub fn add(&mut self, product: Product, qty: u32) {
        self.items
            .entry(product.id.clone())
            .and_modify(|line| line.qty += qty)
            .or_insert(CartLine { product, qty });
        self.persist();
    }

    /// Remove a product's line entirely. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: &ProductId) {
        if self.items.remove(product_id).is_some() {
            self.persist();
        }
    }

    /// Increase an existing line's quantity by one. Absent ids are a no-op.
    pub fn increment(&mut self, product_id: &ProductId) {
        if let Some(line) = self.items.get_mut(product_id) {
            line.qty += 1;
            self.persist();
        }
    }

    /// Decrease an existing line's quantity by one, removing the line once
    /// it would hit zero. Absent ids are a no-op.
    pub fn decrement(&mut self, product_id: &ProductId) {
        let Some(line) = self.items.get_mut(product_id) else {
            return;
        };
        if line.qty <= 1 {
            self.items.remove(product_id);
        } else {
            line.qty -= 1;
        }
        self.persist();
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// The current line map.
    #[must_use]
    pub fn items(&self) -> &HashMap<ProductId, CartLine> {
        &self.items
    }

    /// Total quantity across all cart lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        pricing::item_count(&self.items)
    }

    /// Subtotal in USD.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        pricing::subtotal(&self.items)
    }

    fn persist(&self) {
        storage::persist(
            &*self.storage,
            CART_STORAGE_KEY,
            &CartProjectionRef { items: &self.items },
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use high_country_core::CategoryId;

    use crate::storage::MemoryStorage;

    use super::*;

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_owned(),
            price: Decimal::new(price_cents, 2),
            compare_at_price: None,
            rating: 4.5,
            image: String::new(),
            badge: None,
            category_id: CategoryId::new("knives"),
            description: None,
            stock: None,
        }
    }

    fn empty_store() -> CartStore {
        CartStore::load(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_add_accumulates_quantity() {
        let mut cart = empty_store();
        cart.add(product("a", 10_00), 1);
        cart.add(product("a", 10_00), 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal(), Decimal::new(30_00, 2));
    }

    #[test]
    fn test_decrement_removes_line_at_zero_crossing() {
        let mut cart = empty_store();
        let id = ProductId::new("a");

        cart.add(product("a", 10_00), 2);
        cart.increment(&id);
        cart.decrement(&id);
        cart.decrement(&id);
        assert_eq!(cart.items().get(&id).map(|line| line.qty), Some(1));

        cart.decrement(&id);
        assert!(cart.items().is_empty());

        // Further decrements on the removed line stay no-ops.
        cart.decrement(&id);
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_absent_id_mutations_are_no_ops() {
        let mut cart = empty_store();
        let ghost = ProductId::new("ghost");

        cart.remove(&ghost);
        cart.increment(&ghost);
        cart.decrement(&ghost);

        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut cart = empty_store();
        cart.add(product("a", 10_00), 2);
        cart.add(product("b", 5_50), 1);

        cart.clear();
        assert!(cart.items().is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_state_survives_reload() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        let mut cart = CartStore::load(storage.clone());
        cart.add(product("a", 12_34), 2);
        cart.add(product("b", 5_00), 1);
        drop(cart);

        let restored = CartStore::load(storage);
        assert_eq!(restored.total_items(), 3);
        assert_eq!(restored.subtotal(), Decimal::new(29_68, 2));
    }

    #[test]
    fn test_persisted_document_shape() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        let mut cart = CartStore::load(storage.clone());
        cart.add(product("a", 10_00), 2);

        let raw = storage.get(CART_STORAGE_KEY).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["items"]["a"]["qty"], 2);
        assert_eq!(doc["items"]["a"]["product"]["price"], 10.0);
    }

    #[test]
    fn test_malformed_persisted_cart_restores_empty() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(CART_STORAGE_KEY, "{\"items\":42}").unwrap();

        let cart = CartStore::load(storage);
        assert!(cart.items().is_empty());
    }
}
