//! Currency and text formatting helpers for consistent presentation.
//!
//! The pricing engine returns plain decimal values; these helpers are the
//! presentation-facing edge. The storefront sells in en-US USD only, so the
//! formatting rules are fixed rather than locale-driven.

use rust_decimal::Decimal;

use crate::pricing::round_to_cents;

/// Format a USD amount with a dollar sign, grouped thousands, and exactly
/// two decimal places (e.g. `$1,234.50`).
#[must_use]
pub fn format_usd(value: Decimal) -> String {
    let rounded = round_to_cents(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let text = format!("{abs:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Basic pluralization helper for UI strings.
#[must_use]
pub fn pluralize(count: u32, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        singular.to_owned()
    } else {
        plural.map_or_else(|| format!("{singular}s"), str::to_owned)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
