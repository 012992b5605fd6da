//! Module for handling date parsing.

use chrono::NaiveDate;

/// The one accepted date layout: `MM/dd/yyyy`
pub const SALES_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a sale date strictly as `MM/dd/yyyy`.
///
/// Month and day must be zero-padded to two digits and the year must have
/// four; anything else, including impossible calendar dates, yields `None`.
#[must_use]
pub fn parse_sales_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(s, SALES_DATE_FORMAT).ok()
}
