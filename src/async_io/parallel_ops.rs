//! Async parallel partition writes
//!
//! Partitions are independent, so they are written concurrently. Each
//! write is blocking Parquet encoding and file IO, which runs on tokio's
//! blocking pool while a bounded stream keeps at most `concurrency` of them
//! in flight.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use itertools::Itertools;
use parquet::file::properties::WriterProperties;

use crate::error::{EtlError, Result};
use crate::models::CleanRecord;
use crate::pipeline::PartitionKey;
use crate::utils::io::write_partition;
use crate::utils::logging::{
    create_group_progress_bar, finish_progress_bar, log_operation_complete, log_operation_start,
};

/// Write every partition under `root`, at most `concurrency` at a time
///
/// # Returns
/// The paths of the written files, sorted
///
/// # Errors
/// Returns the first error of any partition write. Partitions that finished
/// before the failure stay written.
pub async fn write_partitions_async(
    root: &Path,
    partitions: BTreeMap<PartitionKey, Vec<CleanRecord>>,
    properties: WriterProperties,
    concurrency: usize,
    show_progress: bool,
) -> Result<Vec<PathBuf>> {
    let start = Instant::now();
    log_operation_start("Writing partitions to", root);

    let total = partitions.len();
    let pb = create_group_progress_bar(total as u64, Some("Writing partitions"), show_progress);
    let root = Arc::new(root.to_path_buf());

    let results = stream::iter(partitions)
        .map(|(key, records)| {
            let root = Arc::clone(&root);
            let properties = properties.clone();
            let pb = pb.clone();
            async move {
                let path = tokio::task::spawn_blocking(move || {
                    write_partition(&root, key, &records, properties)
                })
                .await??;
                pb.inc(1);
                Ok::<_, EtlError>(path)
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect::<Vec<Result<PathBuf>>>()
        .await;

    let written = results
        .into_iter()
        .map(|result| {
            result.inspect_err(|e| log::error!("Error writing partition: {e}"))
        })
        .collect::<Result<Vec<PathBuf>>>()?
        .into_iter()
        .sorted()
        .collect_vec();

    finish_progress_bar(&pb, Some("Partitions written"));
    log_operation_complete("wrote", &root, written.len(), Some(start.elapsed()));
    Ok(written)
}
