//! Algebraic properties of the pricing engine.

use std::collections::HashMap;

use high_country_commerce::config::{CommerceConfig, DiscountStep, VariantId};
use high_country_commerce::pricing;
use high_country_commerce::stores::CartLine;
use high_country_core::{CategoryId, Product, ProductId};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn product(id: &str, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: id.to_owned(),
        price: Decimal::new(price_cents, 2),
        compare_at_price: None,
        rating: 4.0,
        image: String::new(),
        badge: None,
        category_id: CategoryId::new("cookware"),
        description: None,
        stock: None,
    }
}

fn cart_strategy() -> impl Strategy<Value = HashMap<ProductId, CartLine>> {
    proptest::collection::vec((0_i64..=20_000, 1_u32..=10), 0..8).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (price_cents, qty))| {
                let id = format!("p{i}");
                (
                    ProductId::new(id.as_str()),
                    CartLine {
                        product: product(&id, price_cents),
                        qty,
                    },
                )
            })
            .collect()
    })
}

fn ladder_strategy() -> impl Strategy<Value = Vec<DiscountStep>> {
    prop_oneof![
        Just(CommerceConfig::for_variant(VariantId::A).discount_ladder),
        Just(CommerceConfig::for_variant(VariantId::B).discount_ladder),
    ]
}

fn variant_strategy() -> impl Strategy<Value = VariantId> {
    prop_oneof![Just(VariantId::A), Just(VariantId::B)]
}

proptest! {
    #[test]
    fn discount_rate_never_decreases_as_the_cart_grows(
        n in 0_u32..200,
        ladder in ladder_strategy(),
    ) {
        prop_assert!(
            pricing::discount_rate(n, &ladder) <= pricing::discount_rate(n + 1, &ladder)
        );
    }

    #[test]
    fn discount_amount_stays_within_the_subtotal(
        items in cart_strategy(),
        ladder in ladder_strategy(),
    ) {
        let discount = pricing::cart_discount(&items, &ladder);
        prop_assert!(discount.amount >= Decimal::ZERO);
        prop_assert!(discount.amount <= pricing::subtotal(&items));
    }

    #[test]
    fn shipping_is_free_exactly_at_or_above_the_threshold(
        subtotal_cents in 0_i64..=50_000,
        threshold_cents in 0_i64..=50_000,
    ) {
        let estimate = pricing::estimate_shipping(
            Decimal::new(subtotal_cents, 2),
            Decimal::new(threshold_cents, 2),
        );
        if subtotal_cents >= threshold_cents {
            prop_assert_eq!(estimate.cost, Decimal::ZERO);
        } else {
            prop_assert_eq!(estimate.cost, Decimal::new(5_99, 2));
        }
    }

    #[test]
    fn gift_remaining_is_the_clamped_gap_to_the_threshold(
        subtotal_cents in 0_i64..=50_000,
        threshold_cents in 0_i64..=50_000,
    ) {
        let subtotal = Decimal::new(subtotal_cents, 2);
        let threshold = Decimal::new(threshold_cents, 2);
        let eligibility = pricing::free_gift_eligibility(subtotal, threshold);

        prop_assert_eq!(eligibility.remaining, (threshold - subtotal).max(Decimal::ZERO));
        prop_assert_eq!(eligibility.eligible, eligibility.remaining == Decimal::ZERO);
    }

    #[test]
    fn order_preview_components_reconcile(
        items in cart_strategy(),
        variant in variant_strategy(),
    ) {
        let config = CommerceConfig::for_variant(variant);
        let totals = pricing::cart_totals(&items, &config);

        prop_assert_eq!(
            totals.subtotal_after_discount,
            totals.subtotal - totals.discount.amount
        );
        prop_assert_eq!(
            totals.total,
            totals.subtotal_after_discount + totals.shipping.cost + totals.tax
        );
        prop_assert!(totals.tax >= Decimal::ZERO);
    }
}
