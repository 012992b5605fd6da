//! Static reference data used for enrichment.

pub mod county;

pub use county::{CountyLookup, UNKNOWN_COUNTY, UNKNOWN_COUNTY_NUMBER, normalize_county_name};
