//! Year/month partition keys.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

use crate::models::CleanRecord;
use crate::schema::columns::{MONTH, YEAR};

/// Calendar month a record belongs to.
///
/// Orders chronologically, so grouped output is visited oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartitionKey {
    pub year: i32,
    pub month: u32,
}

impl PartitionKey {
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Year text, as stored on the record and in the directory name
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year.to_string()
    }

    /// Month text without zero padding: `"3"`, never `"03"`
    #[must_use]
    pub fn month_label(&self) -> String {
        self.month.to_string()
    }

    /// `year=<y>/month=<m>` relative to the output root
    #[must_use]
    pub fn relative_dir(&self) -> PathBuf {
        PathBuf::from(format!("{YEAR}={}", self.year)).join(format!("{MONTH}={}", self.month))
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{YEAR}={}/{MONTH}={}", self.year, self.month)
    }
}

/// Set `year` and `month` from the record's date
#[must_use]
pub fn assign_partition_keys(mut record: CleanRecord) -> CleanRecord {
    let key = PartitionKey::of(record.date);
    record.year = key.year_label();
    record.month = key.month_label();
    record
}

/// Group records by partition, keeping input order within each group
#[must_use]
pub fn group_by_partition(records: Vec<CleanRecord>) -> BTreeMap<PartitionKey, Vec<CleanRecord>> {
    let mut groups: BTreeMap<PartitionKey, Vec<CleanRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(PartitionKey::of(record.date)).or_default().push(record);
    }
    groups
}
