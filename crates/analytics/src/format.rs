//! Display formatting for the metric values.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Rounds `value` to whole units, groups thousands and prefixes `symbol`.
///
/// Halves round toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`). A
/// negative amount keeps its sign after the symbol: `"$-1,234"`. One that
/// rounds to zero is printed unsigned, so `-0.4` gives `"$0"`, never `"$-0"`.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let rounded = value.round_dp_with_strategy(0, strategy);
    format!("{symbol}{}", group_thousands(rounded))
}

/// Renders a ratio as a percentage with exactly `decimal_places` fractional digits.
///
/// `0.66666` with one decimal place gives `"66.7%"`. Halves round away from zero.
pub fn format_percentage(ratio: Decimal, decimal_places: u32) -> String {
    let pct = ratio.saturating_mul(dec!(100));
    let rounded = pct.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    // The sign comes from the unrounded value so that -0.04% prints as "-0.0%".
    let sign = if pct.is_sign_negative() && !pct.is_zero() { "-" } else { "" };
    format!("{sign}{:.*}%", decimal_places as usize, rounded.abs())
}

/// Formats the integer part of `whole` with `,` between groups of three digits.
pub fn group_thousands(whole: Decimal) -> String {
    let whole = whole.trunc();
    let digits = whole.abs().normalize().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole.is_sign_negative() && !whole.is_zero() {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
