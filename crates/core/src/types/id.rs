//! Newtype IDs for type-safe entity references.
//!
//! Catalog entities are keyed by stable string slugs (e.g. `hl-peak-200`,
//! `water-bottles`). Use the `define_slug!` macro to create type-safe slug
//! wrappers that prevent accidentally mixing IDs from different entity types.

/// Macro to define a type-safe slug ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use high_country_core::define_slug;
/// define_slug!(SkuId);
/// define_slug!(WarehouseId);
///
/// let sku = SkuId::new("hl-peak-200");
/// let warehouse = WarehouseId::new("denver-01");
///
/// // These are different types, so this won't compile:
/// // let _: SkuId = warehouse;
/// ```
#[macro_export]
macro_rules! define_slug {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a slug.
            #[must_use]
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            /// Get the underlying slug.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(slug: &str) -> Self {
                Self(slug.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(slug: String) -> Self {
                Self(slug)
            }
        }
    };
}

// Define standard entity IDs
define_slug!(ProductId);
define_slug!(CategoryId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_as_str() {
        let id = ProductId::new("hl-peak-200");
        assert_eq!(id.as_str(), "hl-peak-200");
        assert_eq!(id.to_string(), "hl-peak-200");
    }

    #[test]
    fn test_from_conversions() {
        let from_str: ProductId = "wb-titan-1l".into();
        let from_string: ProductId = String::from("wb-titan-1l").into();
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn test_serde_transparent() {
        let id = CategoryId::new("water-bottles");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"water-bottles\"");

        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
