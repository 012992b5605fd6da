//! Column name normalization.

use itertools::Itertools;

/// Canonical form of a raw column name: trimmed, with every internal run of
/// whitespace replaced by a single underscore.
///
/// `"  Volume Sold (Liters) "` becomes `"Volume_Sold_(Liters)"`.
#[must_use]
pub fn normalize_column_name(raw: &str) -> String {
    raw.split_whitespace().join("_")
}

/// Normalize a whole header row
#[must_use]
pub fn normalize_headers<'a, I>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    headers.into_iter().map(normalize_column_name).collect()
}
