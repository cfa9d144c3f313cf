//! Persistent wishlist store.
//!
//! A saved-products set keyed by product id for O(1) membership tests.
//! Independent of the cart: moving an item between the two is the UI's
//! composition of a wishlist removal and a cart add.

use std::collections::HashMap;
use std::sync::Arc;

use high_country_core::{Product, ProductId};
use serde::{Deserialize, Serialize};

use crate::storage::{self, Storage};

/// Storage key for the persisted wishlist.
pub const WISHLIST_STORAGE_KEY: &str = "hcg-wishlist";

#[derive(Debug, Default, Deserialize)]
struct WishlistProjection {
    #[serde(default)]
    items: HashMap<ProductId, Product>,
}

#[derive(Serialize)]
struct WishlistProjectionRef<'a> {
    items: &'a HashMap<ProductId, Product>,
}

/// The canonical owner of wishlist state.
pub struct WishlistStore {
    storage: Arc<dyn Storage>,
    items: HashMap<ProductId, Product>,
}

impl WishlistStore {
    /// Restore the wishlist persisted in `storage`, or start empty.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let WishlistProjection { items } = storage::restore(&*storage, WISHLIST_STORAGE_KEY);
        Self { storage, items }
    }

    /// Save a product. Re-saving an already saved product is harmless.
    pub fn add(&mut self, product: Product) {
        self.items.insert(product.id.clone(), product);
        self.persist();
    }

    /// Remove a saved product. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: &ProductId) {
        if self.items.remove(product_id).is_some() {
            self.persist();
        }
    }

    /// Flip membership: save the product if absent, drop it if saved.
    pub fn toggle(&mut self, product: Product) {
        if self.items.remove(&product.id).is_none() {
            self.items.insert(product.id.clone(), product);
        }
        self.persist();
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Whether the product is saved.
    #[must_use]
    pub fn has(&self, product_id: &ProductId) -> bool {
        self.items.contains_key(product_id)
    }

    /// Number of saved products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// The saved products. No ordering contract.
    #[must_use]
    pub fn list(&self) -> Vec<&Product> {
        self.items.values().collect()
    }

    fn persist(&self) {
        storage::persist(
            &*self.storage,
            WISHLIST_STORAGE_KEY,
            &WishlistProjectionRef { items: &self.items },
        );
    }
}
