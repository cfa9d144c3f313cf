//! Centralized pricing logic.
//!
//! - Bundle savings ladder (AOV driver) via config variants.
//! - Shipping estimator (free over threshold, flat below).
//! - Estimated tax helper for cart previews (clearly marked as an estimate).
//! - Free gift eligibility.
//!
//! Every function here is pure and synchronous. Amounts are decimal USD;
//! rounding to cents happens once per computed amount, half away from zero,
//! never on intermediate per-unit prices.

use std::collections::HashMap;

use high_country_core::ProductId;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{CommerceConfig, DiscountStep};
use crate::stores::cart::CartLine;

/// Flat shipping rate charged below the free-shipping threshold.
#[must_use]
pub fn flat_shipping_rate() -> Decimal {
    Decimal::new(599, 2)
}

/// Default estimated sales tax rate (pseudo CO metro, ~8.2%).
#[must_use]
pub fn default_tax_rate() -> Decimal {
    Decimal::new(82, 3)
}

/// Round a currency amount to whole cents, half away from zero.
pub(crate) fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Find the applicable discount rate given an item count and ladder.
///
/// The ladder is ascending by `min_items`; the last step whose `min_items`
/// the count reaches wins, so richer steps override earlier ones. A count
/// below the lowest step yields zero.
#[must_use]
pub fn discount_rate(item_count: u32, ladder: &[DiscountStep]) -> Decimal {
    let mut rate = Decimal::ZERO;
    for step in ladder {
        if item_count >= step.min_items {
            rate = step.rate;
        }
    }
    rate
}

/// Total quantity across all cart lines.
#[must_use]
pub fn item_count(items: &HashMap<ProductId, CartLine>) -> u32 {
    items.values().map(|line| line.qty).sum()
}

/// Cart subtotal in USD, before discounts.
#[must_use]
pub fn subtotal(items: &HashMap<ProductId, CartLine>) -> Decimal {
    items
        .values()
        .map(|line| line.product.price * Decimal::from(line.qty))
        .sum()
}

/// Computed bundle discount for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartDiscount {
    /// Applied discount rate in `[0, 1)`.
    pub rate: Decimal,
    /// Discount value in USD, rounded to cents.
    pub amount: Decimal,
}

/// Compute discount value and rate from cart contents.
///
/// The qualifying count is the sum of line quantities: three units of one
/// product qualify the same as three distinct products.
#[must_use]
pub fn cart_discount(items: &HashMap<ProductId, CartLine>, ladder: &[DiscountStep]) -> CartDiscount {
    let rate = discount_rate(item_count(items), ladder);
    let amount = round_to_cents(subtotal(items) * rate);
    CartDiscount { rate, amount }
}

/// How a shipping estimate was priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingLabel {
    Free,
    Flat,
}

impl ShippingLabel {
    /// Display label for the estimate row.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Flat => "Flat",
        }
    }
}

impl std::fmt::Display for ShippingLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shipping cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingEstimate {
    /// Cost in USD.
    pub cost: Decimal,
    /// Pricing label.
    pub label: ShippingLabel,
}

/// Estimate shipping from the discounted subtotal: free at or above
/// `free_threshold`, otherwise the flat rate.
#[must_use]
pub fn estimate_shipping(subtotal_after_discount: Decimal, free_threshold: Decimal) -> ShippingEstimate {
    if subtotal_after_discount >= free_threshold {
        return ShippingEstimate {
            cost: Decimal::ZERO,
            label: ShippingLabel::Free,
        };
    }
    // Simple heuristic; can be replaced by a carrier matrix later
    ShippingEstimate {
        cost: flat_shipping_rate(),
        label: ShippingLabel::Flat,
    }
}

/// Rough sales tax estimate for cart previews.
///
/// The taxable base is the discounted subtotal plus shipping, clamped at
/// zero. This is an estimate surfaced as non-final; actual tax is settled at
/// checkout.
#[must_use]
pub fn estimate_tax(
    subtotal_after_discount: Decimal,
    shipping_cost: Decimal,
    rate: Decimal,
) -> Decimal {
    let base = (subtotal_after_discount + shipping_cost).max(Decimal::ZERO);
    round_to_cents(base * rate)
}

/// Free-gift unlock state for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeGiftEligibility {
    /// Whether the gift is unlocked.
    pub eligible: bool,
    /// USD remaining until unlock; zero once unlocked.
    pub remaining: Decimal,
    /// The configured unlock threshold.
    pub threshold: Decimal,
}

/// Determine whether a free gift is unlocked.
///
/// Uses the subtotal after discounts, before shipping. Eligible exactly when
/// the threshold is met, including at equality.
#[must_use]
pub fn free_gift_eligibility(
    subtotal_after_discount: Decimal,
    threshold: Decimal,
) -> FreeGiftEligibility {
    let remaining = (threshold - subtotal_after_discount).max(Decimal::ZERO);
    FreeGiftEligibility {
        eligible: remaining <= Decimal::ZERO,
        remaining,
        threshold,
    }
}

/// Full order-preview breakdown for a cart under a variant's settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTotals {
    /// Subtotal before discounts.
    pub subtotal: Decimal,
    /// Applied bundle discount.
    pub discount: CartDiscount,
    /// Subtotal with the discount taken off.
    pub subtotal_after_discount: Decimal,
    /// Shipping estimate, priced from the discounted subtotal.
    pub shipping: ShippingEstimate,
    /// Estimated tax on goods plus shipping.
    pub tax: Decimal,
    /// Grand total.
    pub total: Decimal,
    /// Free-gift unlock state.
    pub free_gift: FreeGiftEligibility,
}

/// Compose the full pricing pipeline for a cart.
///
/// Shipping is priced from the subtotal after discount, and tax from the
/// discounted subtotal plus shipping.
#[must_use]
pub fn cart_totals(items: &HashMap<ProductId, CartLine>, config: &CommerceConfig) -> CartTotals {
    let subtotal = self::subtotal(items);
    let discount = cart_discount(items, &config.discount_ladder);
    let subtotal_after_discount = subtotal - discount.amount;
    let shipping = estimate_shipping(subtotal_after_discount, config.free_shipping_threshold);
    let tax = estimate_tax(subtotal_after_discount, shipping.cost, default_tax_rate());
    // Every term is already cent-rounded.
    let total = subtotal_after_discount + shipping.cost + tax;
    let free_gift = free_gift_eligibility(subtotal_after_discount, config.free_gift_threshold);

    CartTotals {
        subtotal,
        discount,
        subtotal_after_discount,
        shipping,
        tax,
        total,
        free_gift,
    }
}
