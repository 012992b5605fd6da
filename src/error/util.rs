//! Utility functions for error handling
//!
//! Filesystem helpers that attach the offending path and the reason it was
//! being touched to any IO failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{EtlError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(EtlError::io_at(
            path,
            format!("Expected a file for {purpose}"),
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for {purpose}"),
        };
        EtlError::io_at(path, context, e)
    })
}

/// Check that a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_dir() {
        return Err(EtlError::io_at(
            path,
            format!("Expected a directory for {purpose}"),
            io::Error::new(io::ErrorKind::NotFound, "directory not found"),
        ));
    }

    fs::read_dir(path)
        .map(|_| ())
        .map_err(|e| EtlError::io_at(path, format!("Failed to access directory for {purpose}"), e))
}

/// Create a directory and all of its parents
pub fn ensure_directory(path: &Path, purpose: &str) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| EtlError::io_at(path, format!("Failed to create directory for {purpose}"), e))
}

/// Remove a directory tree if it exists
pub fn remove_directory_if_exists(path: &Path, purpose: &str) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(EtlError::io_at(
            path,
            format!("Failed to remove directory for {purpose}"),
            e,
        )),
    }
}
