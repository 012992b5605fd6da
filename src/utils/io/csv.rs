//! Delimited input reading
//!
//! The input is either one delimited file or a directory of `*.csv` files.
//! Each file is bound against its own header row, so files with columns in
//! different orders can be mixed.

use std::path::{Path, PathBuf};
use std::time::Instant;

use csv::ReaderBuilder;
use itertools::Itertools;
use rayon::prelude::*;

use crate::error::util::{safe_open_file, validate_directory};
use crate::error::{EtlError, Result};
use crate::models::RawRecord;
use crate::schema::RawSchema;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Find the delimited files making up the input
///
/// A file path is returned as is. A directory yields its `*.csv` files
/// (case-insensitive extension), sorted by path so reads are repeatable.
pub fn find_csv_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    validate_directory(path, "raw input")?;

    let files = std::fs::read_dir(path)
        .map_err(|e| EtlError::io_at(path, "Failed to read input directory", e))?
        .map(|entry| {
            entry
                .map(|e| e.path())
                .map_err(|e| EtlError::io_at(path, "Failed to read directory entry", e))
        })
        .filter_ok(|p| {
            p.is_file()
                && p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .sorted()
        .collect_vec();

    if files.is_empty() {
        log_warning("No CSV files found in input directory", Some(path));
    }
    Ok(files)
}

/// Read one delimited file with a header row into raw records
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray Latin-1 character only affects the cell it appears in.
///
/// # Errors
/// Returns an error if the file cannot be opened, is not valid delimited
/// text, or lacks a required column.
pub fn read_raw_file(path: &Path, delimiter: u8) -> Result<Vec<RawRecord>> {
    let file = safe_open_file(path, "raw input")?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .byte_headers()?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect_vec();
    let schema = RawSchema::from_raw_headers(headers.iter().map(String::as_str)).map_err(|e| match e {
        EtlError::Schema(message) => EtlError::Schema(format!("{}: {message}", path.display())),
        other => other,
    })?;

    reader
        .byte_records()
        .map(|row| Ok(schema.extract(&row?)))
        .collect()
}

/// Read every input file, in parallel, into one list of raw records
///
/// Records keep file order and then row order within each file.
pub fn read_raw_records(path: &Path, delimiter: u8) -> Result<Vec<RawRecord>> {
    let start = Instant::now();
    log_operation_start("Reading raw sales from", path);

    let files = find_csv_files(path)?;
    let records = files
        .par_iter()
        .map(|file| read_raw_file(file, delimiter))
        .collect::<Result<Vec<Vec<RawRecord>>>>()?
        .into_iter()
        .flatten()
        .collect_vec();

    log_operation_complete("read", path, records.len(), Some(start.elapsed()));
    Ok(records)
}
