//! Fixed-point helpers shared by the record models.
//!
//! Money and volume fields are [`Decimal`] values held at exactly two
//! fractional digits, so they map one to one onto an Arrow `Decimal128(p, 2)`
//! column. Every rounding step rounds half away from zero.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by every money and volume field
pub const SCALE: u32 = 2;

/// Round to two places and keep the value only if it fits a decimal of
/// `precision` total digits.
///
/// The result always has a scale of exactly [`SCALE`].
#[must_use]
pub fn quantize(value: Decimal, precision: u8) -> Option<Decimal> {
    let mut rounded = value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(SCALE);
    10_i128
        .checked_pow(u32::from(precision))
        .is_none_or(|limit| rounded.mantissa().abs() < limit)
        .then_some(rounded)
}

/// Parse plain decimal text such as `"12"`, `"-3.5"` or `".125"`.
///
/// Exponents, separators, units and anything else that is not a signed
/// run of digits with at most one point yield `None`.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    let negative = text.starts_with('-');
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);

    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    if !integer.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let sign = if negative { "-" } else { "" };
    let integer = if integer.is_empty() { "0" } else { integer };
    let plain = if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    };
    Decimal::from_str(&plain).ok()
}

/// Unscaled integer of a two-place value, as stored in `Decimal128(p, 2)`
#[must_use]
pub fn unscaled(value: Decimal) -> i128 {
    let mut value = value;
    value.rescale(SCALE);
    value.mantissa()
}

/// Two-place value from an unscaled `Decimal128(p, 2)` integer
#[must_use]
pub fn from_unscaled(unscaled: i128) -> Option<Decimal> {
    Decimal::try_from_i128_with_scale(unscaled, SCALE).ok()
}
