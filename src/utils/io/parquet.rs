//! Parquet partition output
//!
//! Each partition is written as a single Snappy-compressed file under
//! `<root>/year=<y>/month=<m>/`. Writes go to a hidden staging directory
//! first and replace the previous partition directory only once the file
//! is complete, so a partition is never observed half written.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::util::{ensure_directory, remove_directory_if_exists, safe_open_file};
use crate::error::{EtlError, Result};
use crate::models::CleanRecord;
use crate::pipeline::PartitionKey;
use crate::utils::arrow::records_to_batch;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// File name of the single data file in each partition directory
pub const PART_FILE_NAME: &str = "part-00000.parquet";

/// Writer settings shared by every partition
#[must_use]
pub fn writer_properties(max_row_group_size: usize) -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .set_max_row_group_size(max_row_group_size)
        .build()
}

/// Directory holding one partition's data
#[must_use]
pub fn partition_dir(root: &Path, key: PartitionKey) -> PathBuf {
    root.join(key.relative_dir())
}

fn staging_dir(root: &Path, key: PartitionKey) -> PathBuf {
    root.join(format!(".staging-year={}-month={}", key.year, key.month))
}

/// Write one partition, replacing whatever was there before
///
/// # Returns
/// The path of the written data file
///
/// # Errors
/// Returns an error if the batch cannot be built or any filesystem or
/// Parquet operation fails. The previous partition contents are left in
/// place when the failure happens before the swap.
pub fn write_partition(
    root: &Path,
    key: PartitionKey,
    records: &[CleanRecord],
    properties: WriterProperties,
) -> Result<PathBuf> {
    let staging = staging_dir(root, key);
    let target = partition_dir(root, key);

    remove_directory_if_exists(&staging, "partition staging")?;
    ensure_directory(&staging, "partition staging")?;

    let batch = records_to_batch(records)?;
    let staged_file = staging.join(PART_FILE_NAME);
    let file = File::create(&staged_file)
        .map_err(|e| EtlError::io_at(&staged_file, "Failed to create partition file", e))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(properties))?;
    writer.write(&batch)?;
    writer.close()?;

    if let Some(parent) = target.parent() {
        ensure_directory(parent, "partition output")?;
    }
    remove_directory_if_exists(&target, "partition output")?;
    fs::rename(&staging, &target)
        .map_err(|e| EtlError::io_at(&target, "Failed to move partition into place", e))?;

    log::debug!("Wrote {} rows to partition {key}", records.len());
    Ok(target.join(PART_FILE_NAME))
}

/// Read a Parquet file into Arrow record batches
///
/// # Errors
/// Returns an error if the file cannot be opened or is not valid Parquet
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>> {
    let start = Instant::now();
    log_operation_start("Reading parquet file", path);

    let file = safe_open_file(path, "parquet read")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;

    log_operation_complete("read", path, batches.len(), Some(start.elapsed()));
    Ok(batches)
}

/// Read back every batch of one written partition
///
/// # Errors
/// Returns an error if the partition does not exist or cannot be read
pub fn read_partition(root: &Path, key: PartitionKey) -> Result<Vec<RecordBatch>> {
    read_parquet(&partition_dir(root, key).join(PART_FILE_NAME))
}
