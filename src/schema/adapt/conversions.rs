//! Text-to-value conversions for loosely formatted numeric cells.
//!
//! Every conversion is total: text that does not parse becomes `None`.

use rust_decimal::Decimal;

use crate::models::{parse_decimal, quantize};

/// Strip comma thousands separators
fn strip_commas(s: &str) -> String {
    s.chars().filter(|c| *c != ',').collect()
}

/// Strip currency symbols and comma thousands separators
fn strip_currency(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '$' | ',')).collect()
}

/// Parse a 32-bit integer after removing thousands separators.
///
/// `"1,200"` parses to 1200; `"12 bottles"`, `"1.5"` and out-of-range
/// values yield `None`.
#[must_use]
pub fn parse_int(s: &str) -> Option<i32> {
    strip_commas(s).trim().parse::<i32>().ok()
}

/// Parse a two-place fixed-point amount, tolerating `$` and thousands
/// separators. Used for both money and volumes.
///
/// Rounded half-up to two places; values wider than `precision` total
/// digits yield `None`.
#[must_use]
pub fn parse_fixed(s: &str, precision: u8) -> Option<Decimal> {
    quantize(parse_decimal(&strip_currency(s))?, precision)
}
