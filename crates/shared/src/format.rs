//! Display formatting for rupee amounts and percentages.
//!
//! Amounts are rendered the way Indian property listings quote them:
//! crores above 1 Cr, lakhs above 1 L, and grouped rupees below that.
//! Formatting never feeds back into calculations.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// One crore (1,00,00,000).
pub const CRORE: Decimal = dec!(10000000);

/// One lakh (1,00,000).
pub const LAKH: Decimal = dec!(100000);

/// Rupee symbol prefix.
const RUPEE: &str = "₹";

/// Maximum fractional digits kept by the grouped tier.
const GROUPED_MAX_FRACTION: u32 = 3;

/// Formats a rupee amount as `₹4.10 Cr`, `₹2.80 L`, or `₹50,000`.
#[must_use]
pub fn format_inr(amount: Decimal) -> String {
    if amount >= CRORE {
        format!("{RUPEE}{} Cr", two_places(amount / CRORE))
    } else if amount >= LAKH {
        format!("{RUPEE}{} L", two_places(amount / LAKH))
    } else {
        format!("{RUPEE}{}", group_indian(amount))
    }
}

/// Formats a percentage value as `8.2%`, dropping trailing zeros.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

/// Renders `value` to two places the way browser `toFixed(2)` does.
///
/// The nearest `f64` to the exact quotient is rounded, not the quotient
/// itself, so `1.025` (stored as `1.02499...`) becomes `1.02` while an
/// exactly representable `1.125` rounds up to `1.13`.
fn two_places(value: Decimal) -> String {
    let nearest = value
        .to_string()
        .parse::<f64>()
        .ok()
        .and_then(Decimal::from_f64_retain)
        .unwrap_or(value);
    let mut rounded = nearest.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Groups digits the `en-IN` way: the last three, then pairs.
///
/// `1234567.5` becomes `12,34,567.5`.
#[must_use]
pub fn group_indian(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(GROUPED_MAX_FRACTION, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 1);
    if negative {
        out.push('-');
    }

    if int_part.len() <= 3 {
        out.push_str(int_part);
    } else {
        let (head, tail) = int_part.split_at(int_part.len() - 3);
        let lead = head.len() % 2;
        if lead == 1 {
            out.push_str(&head[..1]);
        }
        for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
            if i > 0 || lead == 1 {
                out.push(',');
            }
            // ASCII digits only
            out.extend(pair.iter().map(|&b| char::from(b)));
        }
        out.push(',');
        out.push_str(tail);
    }

    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }

    out
}
