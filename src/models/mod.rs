//! Record models for the cleaning pipeline.

pub mod raw;
pub mod record;
pub mod types;

pub use raw::{RawRecord, non_blank};
pub use record::CleanRecord;
pub use types::{from_unscaled, parse_decimal, quantize, unscaled};
