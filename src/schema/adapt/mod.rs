//! Module for adapting raw text cells into typed values.

pub mod conversions;
pub mod date_utils;

pub use conversions::{parse_fixed, parse_int};
pub use date_utils::{SALES_DATE_FORMAT, parse_sales_date};
