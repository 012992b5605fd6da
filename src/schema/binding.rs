//! Header-level schema handling: dropping, renaming and binding raw columns
//! to the fields of a [`RawRecord`].

use csv::ByteRecord;
use log::debug;

use crate::error::{EtlError, Result};
use crate::models::RawRecord;
use crate::schema::columns::{self, DROPPED_COLUMNS, OPTIONAL_COLUMNS, RENAMES, REQUIRED_COLUMNS};
use crate::schema::normalize::normalize_headers;

/// Remove columns that carry no meaning downstream
#[must_use]
pub fn drop_columns(headers: Vec<String>) -> Vec<String> {
    headers
        .into_iter()
        .map(|h| {
            if DROPPED_COLUMNS.contains(&h.as_str()) {
                String::new()
            } else {
                h
            }
        })
        .collect()
}

/// Apply the fixed column renames.
///
/// Fails if a rename source is missing, since every later stage expects the
/// renamed column to exist.
pub fn rename_columns(headers: &mut [String]) -> Result<()> {
    for (from, to) in RENAMES {
        let slot = headers.iter_mut().find(|h| h.as_str() == from).ok_or_else(|| {
            EtlError::Schema(format!("cannot rename '{from}' to '{to}': column not found"))
        })?;
        *slot = to.to_string();
    }
    Ok(())
}

/// Positions of the known columns in a raw header row
#[derive(Debug, Clone)]
pub struct RawSchema {
    bindings: Vec<(usize, &'static str)>,
}

impl RawSchema {
    /// Normalize, drop, rename and bind a raw header row.
    ///
    /// Dropped columns (`Store_Location`) are blanked so their cells are
    /// never read. Unknown extra columns are ignored.
    pub fn from_raw_headers<'a, I>(raw_headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut headers = drop_columns(normalize_headers(raw_headers));
        rename_columns(&mut headers)?;
        Self::bind(&headers)
    }

    /// Bind already-normalized and renamed headers
    pub fn bind(headers: &[String]) -> Result<Self> {
        let canonical: Vec<&str> = headers.iter().map(|h| columns::canonical_name(h)).collect();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !canonical.contains(column))
            .collect();
        if !missing.is_empty() {
            return Err(EtlError::Schema(format!(
                "input is missing required columns: {}",
                missing.join(", ")
            )));
        }

        let bindings = REQUIRED_COLUMNS
            .iter()
            .chain(OPTIONAL_COLUMNS.iter())
            .filter_map(|&column| {
                canonical
                    .iter()
                    .position(|h| *h == column)
                    .map(|index| (index, column))
            })
            .collect::<Vec<_>>();

        debug!("Bound {} of {} input columns", bindings.len(), headers.len());

        Ok(Self { bindings })
    }

    /// Extract the bound cells of one row. Short rows yield nulls for the
    /// cells they lack.
    ///
    /// Cells are decoded as UTF-8, with invalid bytes replaced by U+FFFD.
    #[must_use]
    pub fn extract(&self, row: &ByteRecord) -> RawRecord {
        let mut record = RawRecord::default();
        for &(index, column) in &self.bindings {
            if let Some(cell) = row.get(index) {
                record.set(column, &String::from_utf8_lossy(cell));
            }
        }
        record
    }
}
