//! Persisted client-state stores.
//!
//! Each store is the single logical owner of its slice of state: it restores
//! from durable storage on load, applies mutations in memory, and re-persists
//! its serializable projection after every change. Derived values are
//! recomputed from current state on every read; nothing derived is cached or
//! persisted.
//!
//! There is no cross-tab synchronization: concurrent clients each hold their
//! own in-memory copy and the last write wins.

pub mod cart;
pub mod recent;
pub mod wishlist;

pub use cart::{CartLine, CartStore};
pub use recent::RecentlyViewedStore;
pub use wishlist::WishlistStore;
