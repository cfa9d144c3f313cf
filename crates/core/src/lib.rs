//! High Country Core - Shared types library.
//!
//! This crate provides the domain types used across all High Country Gear
//! components:
//! - `commerce` - Pricing engine and persisted client-state stores
//! - `integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and data - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Slug-keyed IDs and the product/category domain model
//! - [`catalog`] - The static storefront catalog shipped with the client

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use types::*;
