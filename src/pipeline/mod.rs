//! Record-level cleaning pipeline.
//!
//! Each raw record goes through the same fixed sequence of stages:
//! completeness check, county enrichment, type coercion, volume imputation,
//! metric derivation and partition key assignment. Stages are pure
//! functions of one record, so the whole input is processed in parallel
//! while keeping input order.

pub mod coerce;
pub mod enrich;
pub mod impute;
pub mod metrics;
pub mod partition;
pub mod report;
pub mod validate;

use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::models::{CleanRecord, RawRecord};
use crate::reference::CountyLookup;

pub use coerce::coerce_record;
pub use enrich::enrich_county;
pub use impute::impute_volumes;
pub use metrics::derive_metrics;
pub use partition::{PartitionKey, assign_partition_keys, group_by_partition};
pub use report::PipelineReport;
pub use validate::validate_complete;

/// Side facts about a kept record, used for the run report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageTrace {
    pub county_matched: bool,
    pub liters_imputed: bool,
    pub gallons_imputed: bool,
}

/// Result of running one record through every stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Kept { record: CleanRecord, trace: StageTrace },
    /// A mandatory column was null
    Incomplete,
    /// The date was null or not `MM/dd/yyyy`
    InvalidDate,
}

impl RecordOutcome {
    #[must_use]
    pub fn into_record(self) -> Option<CleanRecord> {
        match self {
            Self::Kept { record, .. } => Some(record),
            Self::Incomplete | Self::InvalidDate => None,
        }
    }
}

/// Run one raw record through every stage
#[must_use]
pub fn evaluate_record(raw: RawRecord, lookup: &CountyLookup) -> RecordOutcome {
    let Some(raw) = validate_complete(raw) else {
        return RecordOutcome::Incomplete;
    };
    let (raw, county_matched) = enrich_county(raw, lookup);
    let Some(record) = coerce_record(raw) else {
        return RecordOutcome::InvalidDate;
    };
    let (record, imputed) = impute_volumes(record);
    let record = assign_partition_keys(derive_metrics(record));

    RecordOutcome::Kept {
        record,
        trace: StageTrace {
            county_matched,
            liters_imputed: imputed.liters,
            gallons_imputed: imputed.gallons,
        },
    }
}

/// Clean one raw record, or `None` if it is dropped
#[must_use]
pub fn process_record(raw: RawRecord, lookup: &CountyLookup) -> Option<CleanRecord> {
    evaluate_record(raw, lookup).into_record()
}

/// Clean all records in parallel.
///
/// Output keeps the relative order of the input. `progress` is advanced
/// once per record; pass `ProgressBar::hidden()` to run silently.
#[must_use]
pub fn transform_records(
    records: Vec<RawRecord>,
    lookup: &CountyLookup,
    progress: &ProgressBar,
) -> (Vec<CleanRecord>, PipelineReport) {
    let outcomes: Vec<RecordOutcome> = records
        .into_par_iter()
        .map(|raw| {
            let outcome = evaluate_record(raw, lookup);
            progress.inc(1);
            outcome
        })
        .collect();

    let mut report = PipelineReport::default();
    let mut cleaned = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        report.record(&outcome);
        if let Some(record) = outcome.into_record() {
            cleaned.push(record);
        }
    }

    log::debug!(
        "Kept {} of {} records ({} incomplete, {} with invalid dates)",
        report.rows_kept(),
        report.rows_read,
        report.dropped_incomplete,
        report.dropped_invalid_date
    );

    (cleaned, report)
}
