//! Persisted store of recently viewed products.
//!
//! An ordered sequence, most recent first, deduplicated and capped. Viewing
//! a product again moves it to the front rather than adding a duplicate.

use std::sync::Arc;

use high_country_core::Product;
use serde::{Deserialize, Serialize};

use crate::storage::{self, Storage};

/// Storage key for the persisted sequence.
pub const RECENT_STORAGE_KEY: &str = "hcg-recent";

/// Maximum number of recently viewed products kept; older entries are
/// evicted from the tail.
pub const MAX_RECENT: usize = 10;

#[derive(Debug, Default, Deserialize)]
struct RecentProjection {
    #[serde(default)]
    items: Vec<Product>,
}

#[derive(Serialize)]
struct RecentProjectionRef<'a> {
    items: &'a [Product],
}

/// The canonical owner of the recently-viewed sequence.
pub struct RecentlyViewedStore {
    storage: Arc<dyn Storage>,
    items: Vec<Product>,
}

impl RecentlyViewedStore {
    /// Restore the sequence persisted in `storage`, or start empty.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let RecentProjection { items } = storage::restore(&*storage, RECENT_STORAGE_KEY);
        Self { storage, items }
    }

    /// Record a product view: move-to-front with dedup, then truncate to
    /// [`MAX_RECENT`].
    pub fn add(&mut self, product: Product) {
        self.items.retain(|p| p.id != product.id);
        self.items.insert(0, product);
        self.items.truncate(MAX_RECENT);
        self.persist();
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// The sequence, most recently viewed first.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.items
    }

    fn persist(&self) {
        storage::persist(
            &*self.storage,
            RECENT_STORAGE_KEY,
            &RecentProjectionRef { items: &self.items },
        );
    }
}
