//! Integration tests for High Country Gear.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p high-country-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_scenarios` - Variant resolution, cart pricing, and state
//!   restoration across simulated sessions over file-backed storage
//!
//! The suites exercise the commerce crates the way the storefront shell
//! does: resolve a variant, mutate stores, derive totals, then start a
//! "new session" against the same storage root and verify nothing drifted.

#![cfg_attr(not(test), forbid(unsafe_code))]
