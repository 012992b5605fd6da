//! County enrichment against the static reference table.

use crate::models::RawRecord;
use crate::reference::{CountyLookup, UNKNOWN_COUNTY, UNKNOWN_COUNTY_NUMBER, normalize_county_name};

/// Normalize the county name, backfill a missing county code from the
/// lookup, then apply the sentinels.
///
/// The sentinels are applied per field: a record without a county name but
/// with a supplied code keeps its code and gets `UNKNOWN` as its name.
/// Returns whether the name resolved in the lookup.
#[must_use]
pub fn enrich_county(mut record: RawRecord, lookup: &CountyLookup) -> (RawRecord, bool) {
    let normalized = record
        .county
        .as_deref()
        .map(normalize_county_name)
        .filter(|name| !name.is_empty());
    let code = normalized.as_deref().and_then(|name| lookup.code(name));

    record.county_number = record
        .county_number
        .or_else(|| code.map(|c| c.to_string()))
        .or_else(|| Some(UNKNOWN_COUNTY_NUMBER.to_string()));
    record.county = normalized.or_else(|| Some(UNKNOWN_COUNTY.to_string()));

    (record, code.is_some())
}
