//! Centralized commerce configuration with A/B variants.
//!
//! Controls the bundle discount ladder, free-shipping threshold, and
//! free-gift threshold. The active variant can be overridden via a `variant`
//! URL parameter and is persisted so later sessions reuse the same arm of
//! the experiment.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::storage::Storage;

/// Storage key for the persisted variant choice.
pub const VARIANT_STORAGE_KEY: &str = "hcg-variant";

/// The variant parse rejected an unrecognized identifier.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized commerce variant")]
pub struct ParseVariantError;

/// Commerce experiment variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VariantId {
    /// Control.
    #[default]
    A,
    /// Alternative test arm.
    B,
}

impl VariantId {
    /// The identifier as persisted and as accepted in URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantId {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            _ => Err(ParseVariantError),
        }
    }
}

/// Discount ladder step: `rate` applies when the cart item count reaches
/// `min_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountStep {
    /// Minimum number of items to qualify for this step.
    pub min_items: u32,
    /// Discount rate as a decimal (e.g., 0.1 = 10%).
    pub rate: Decimal,
}

/// Commerce settings for a variant.
///
/// Ladders are ascending by `min_items` with non-decreasing rates; the
/// pricing engine relies on that ordering and does not sort defensively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommerceConfig {
    /// Variant identifier.
    pub id: VariantId,
    /// Progressive discount ladder by item count.
    pub discount_ladder: Vec<DiscountStep>,
    /// Free shipping threshold in USD.
    pub free_shipping_threshold: Decimal,
    /// Free gift threshold in USD.
    pub free_gift_threshold: Decimal,
}

impl CommerceConfig {
    /// The hard-coded settings for `id`. Variants are static data, not
    /// fetched.
    #[must_use]
    pub fn for_variant(id: VariantId) -> Self {
        match id {
            VariantId::A => Self::variant_a(),
            VariantId::B => Self::variant_b(),
        }
    }

    /// Variant A: control.
    fn variant_a() -> Self {
        Self {
            id: VariantId::A,
            discount_ladder: vec![
                DiscountStep {
                    min_items: 2,
                    rate: Decimal::new(10, 2),
                },
                DiscountStep {
                    min_items: 3,
                    rate: Decimal::new(15, 2),
                },
            ],
            free_shipping_threshold: Decimal::from(39),
            free_gift_threshold: Decimal::from(120),
        }
    }

    /// Variant B: alternative test.
    fn variant_b() -> Self {
        Self {
            id: VariantId::B,
            discount_ladder: vec![
                DiscountStep {
                    min_items: 2,
                    rate: Decimal::new(5, 2),
                },
                DiscountStep {
                    min_items: 3,
                    rate: Decimal::new(10, 2),
                },
                DiscountStep {
                    min_items: 4,
                    rate: Decimal::new(15, 2),
                },
            ],
            free_shipping_threshold: Decimal::from(49),
            free_gift_threshold: Decimal::from(150),
        }
    }
}

/// Read a variant override from a URL, if present and valid.
///
/// The standard query string is consulted first. To support hash-based
/// routing, a query string embedded in the fragment (e.g. `#/?variant=B`) is
/// used only when the standard query does not carry the parameter at all.
/// Unrecognized values are treated as absent.
#[must_use]
pub fn variant_override_from_url(url: &Url) -> Option<VariantId> {
    let mut value = url
        .query_pairs()
        .find(|(key, _)| key == "variant")
        .map(|(_, value)| value.into_owned());

    if value.is_none() {
        if let Some((_, embedded)) = url.fragment().and_then(|f| f.split_once('?')) {
            value = url::form_urlencoded::parse(embedded.as_bytes())
                .find(|(key, _)| key == "variant")
                .map(|(_, value)| value.into_owned());
        }
    }

    value.and_then(|v| v.parse().ok())
}

/// Resolve the active variant with precedence:
/// 1) URL override
/// 2) Persisted value
/// 3) Default to [`VariantId::A`] (control)
///
/// The winning override (or the default, on first resolution) is persisted
/// best-effort so subsequent sessions land on the same arm.
pub fn resolve_variant(url_override: Option<VariantId>, storage: &dyn Storage) -> VariantId {
    if let Some(variant) = url_override {
        persist_variant(storage, variant);
        return variant;
    }
    if let Some(variant) = persisted_variant(storage) {
        return variant;
    }
    let default = VariantId::default();
    persist_variant(storage, default);
    default
}

/// Settings for the active variant, resolving from `url` when given.
pub fn active_config(url: Option<&Url>, storage: &dyn Storage) -> CommerceConfig {
    let url_override = url.and_then(variant_override_from_url);
    CommerceConfig::for_variant(resolve_variant(url_override, storage))
}

/// Load the persisted variant choice; invalid entries fall through.
fn persisted_variant(storage: &dyn Storage) -> Option<VariantId> {
    storage.get(VARIANT_STORAGE_KEY)?.parse().ok()
}

/// Persist the active variant, best-effort.
fn persist_variant(storage: &dyn Storage, variant: VariantId) {
    if let Err(err) = storage.set(VARIANT_STORAGE_KEY, variant.as_str()) {
        tracing::warn!(variant = %variant, error = %err, "failed to persist variant choice");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_variant_round_trips_through_str() {
        assert_eq!("A".parse::<VariantId>().unwrap(), VariantId::A);
        assert_eq!(VariantId::B.to_string(), "B");
        assert!("b".parse::<VariantId>().is_err());
        assert!("C".parse::<VariantId>().is_err());
    }

    #[test]
    fn test_override_from_standard_query() {
        let parsed = variant_override_from_url(&url("https://highcountrygear.shop/?variant=B"));
        assert_eq!(parsed, Some(VariantId::B));
    }

    #[test]
    fn test_override_from_hash_routed_query() {
        let parsed = variant_override_from_url(&url("https://highcountrygear.shop/#/?variant=A"));
        assert_eq!(parsed, Some(VariantId::A));
    }

    #[test]
    fn test_standard_query_shadows_fragment() {
        // The fragment value only fills in when the standard query lacks the
        // parameter entirely, even if the standard value is unusable.
        let parsed = variant_override_from_url(&url(
            "https://highcountrygear.shop/?variant=C#/?variant=B",
        ));
        assert_eq!(parsed, None);
    }

    #[test]
    fn test_invalid_override_is_absent() {
        assert_eq!(
            variant_override_from_url(&url("https://highcountrygear.shop/?variant=zz")),
            None
        );
        assert_eq!(
            variant_override_from_url(&url("https://highcountrygear.shop/#/checkout")),
            None
        );
    }

    #[test]
    fn test_resolution_prefers_override_and_persists_it() {
        let storage = MemoryStorage::new();
        storage.set(VARIANT_STORAGE_KEY, "A").unwrap();

        let resolved = resolve_variant(Some(VariantId::B), &storage);
        assert_eq!(resolved, VariantId::B);
        assert_eq!(storage.get(VARIANT_STORAGE_KEY).as_deref(), Some("B"));
    }

    #[test]
    fn test_resolution_falls_back_to_persisted_choice() {
        let storage = MemoryStorage::new();
        storage.set(VARIANT_STORAGE_KEY, "B").unwrap();

        assert_eq!(resolve_variant(None, &storage), VariantId::B);
    }

    #[test]
    fn test_resolution_defaults_to_control_and_persists() {
        let storage = MemoryStorage::new();

        assert_eq!(resolve_variant(None, &storage), VariantId::A);
        assert_eq!(storage.get(VARIANT_STORAGE_KEY).as_deref(), Some("A"));
    }

    #[test]
    fn test_corrupt_persisted_choice_falls_through() {
        let storage = MemoryStorage::new();
        storage.set(VARIANT_STORAGE_KEY, "??").unwrap();

        assert_eq!(resolve_variant(None, &storage), VariantId::A);
        // The default overwrote the unusable entry.
        assert_eq!(storage.get(VARIANT_STORAGE_KEY).as_deref(), Some("A"));
    }

    #[test]
    fn test_active_config_reads_url_and_storage() {
        let storage = MemoryStorage::new();
        let config = active_config(
            Some(&url("https://highcountrygear.shop/#/?variant=B")),
            &storage,
        );
        assert_eq!(config.id, VariantId::B);
        assert_eq!(config.free_shipping_threshold, Decimal::from(49));

        // A later session with no override sticks to the persisted arm.
        let config = active_config(None, &storage);
        assert_eq!(config.id, VariantId::B);
    }

    #[test]
    fn test_variant_records() {
        let a = CommerceConfig::for_variant(VariantId::A);
        assert_eq!(a.discount_ladder.len(), 2);
        assert_eq!(a.free_gift_threshold, Decimal::from(120));

        let b = CommerceConfig::for_variant(VariantId::B);
        assert_eq!(b.discount_ladder.len(), 3);
        assert_eq!(
            b.discount_ladder.first().unwrap().rate,
            Decimal::new(5, 2)
        );
    }
}
