//! End-to-end pipeline run
//!
//! Reading and cleaning are CPU bound and run on the blocking pool, using
//! rayon inside. Partition writes are then fanned out asynchronously.

use std::time::Instant;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::error::util::ensure_directory;
use crate::pipeline::{PipelineReport, group_by_partition, transform_records};
use crate::reference::CountyLookup;
use crate::utils::io::{read_raw_records, writer_properties};
use crate::utils::logging::{create_main_progress_bar, finish_progress_bar, log_report};

use super::parallel_ops::write_partitions_async;

/// Read the raw input, clean it and write the partitioned output
///
/// Partitions present in this run's data replace their previous contents;
/// other partitions under the output root are left alone.
///
/// # Errors
/// Returns an error if the configuration is invalid, the input cannot be
/// read or lacks a required column, or any partition fails to write.
pub async fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport> {
    config.validate()?;
    let start = Instant::now();

    let raw_path = config.raw_path.clone();
    let delimiter = config.delimiter;
    let show_progress = config.show_progress;
    let (records, mut report) = tokio::task::spawn_blocking(move || -> Result<_> {
        let raw = read_raw_records(&raw_path, delimiter)?;
        let pb = create_main_progress_bar(raw.len() as u64, Some("Cleaning records"), show_progress);
        let cleaned = transform_records(raw, CountyLookup::global(), &pb);
        finish_progress_bar(&pb, Some("Records cleaned"));
        Ok(cleaned)
    })
    .await??;

    report.rows_written = records.len();
    let partitions = group_by_partition(records);

    ensure_directory(&config.clean_path, "clean output")?;
    let written = write_partitions_async(
        &config.clean_path,
        partitions,
        writer_properties(config.max_row_group_size),
        config.write_concurrency,
        config.show_progress,
    )
    .await?;
    report.partitions_written = written.len();

    log_report(&report);
    log::info!("Pipeline finished in {:?}", start.elapsed());
    Ok(report)
}
