//! Logging utilities
//!
//! Standardized log lines for the start and end of long operations.

use std::path::Path;
use std::time::Duration;

use crate::pipeline::PipelineReport;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file or directory being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Past-tense description of the operation
/// * `path` - Path of the file or directory that was operated on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, path: &Path, items: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} {} items at {} in {:?}",
            operation,
            items,
            path.display(),
            duration
        );
    } else {
        log::info!("Successfully {} {} items at {}", operation, items, path.display());
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}

/// Log the counters of a finished run, warning about dropped rows
pub fn log_report(report: &PipelineReport) {
    let dropped = report.dropped_incomplete + report.dropped_invalid_date;
    if dropped > 0 {
        log::warn!(
            "Dropped {dropped} of {} rows ({} incomplete, {} with invalid dates)",
            report.rows_read,
            report.dropped_incomplete,
            report.dropped_invalid_date
        );
    }
    if report.county_lookup_misses > 0 {
        log::info!("{} rows had an unrecognized county", report.county_lookup_misses);
    }
    match serde_json::to_string(report) {
        Ok(json) => log::info!("Run report: {json}"),
        Err(e) => log::warn!("Could not serialize run report: {e}"),
    }
}
