//! Run counters.

use serde::Serialize;

use super::RecordOutcome;

/// What happened to the rows of one run.
///
/// Serialized as JSON at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub rows_read: usize,
    pub dropped_incomplete: usize,
    pub dropped_invalid_date: usize,
    pub county_lookup_misses: usize,
    pub liters_imputed: usize,
    pub gallons_imputed: usize,
    pub rows_written: usize,
    pub partitions_written: usize,
}

impl PipelineReport {
    /// Count one record's outcome
    pub fn record(&mut self, outcome: &RecordOutcome) {
        self.rows_read += 1;
        match outcome {
            RecordOutcome::Incomplete => self.dropped_incomplete += 1,
            RecordOutcome::InvalidDate => self.dropped_invalid_date += 1,
            RecordOutcome::Kept { trace, .. } => {
                self.county_lookup_misses += usize::from(!trace.county_matched);
                self.liters_imputed += usize::from(trace.liters_imputed);
                self.gallons_imputed += usize::from(trace.gallons_imputed);
            }
        }
    }

    /// Rows that survived validation and date coercion
    #[must_use]
    pub const fn rows_kept(&self) -> usize {
        self.rows_read - self.dropped_incomplete - self.dropped_invalid_date
    }
}
