//! Completeness check on raw records.

use log::trace;

use crate::models::RawRecord;

/// Keep a record only if every mandatory column has a value.
///
/// Runs on raw text, so a blank cell counts as missing even for numeric
/// columns.
#[must_use]
pub fn validate_complete(record: RawRecord) -> Option<RawRecord> {
    let missing = record.missing_mandatory();
    if missing.is_empty() {
        Some(record)
    } else {
        trace!(
            "Dropping record {:?}: missing {}",
            record.invoice_number,
            missing.join(", ")
        );
        None
    }
}
