//! Configuration for a pipeline run.
//!
//! Only the two locations affect what gets written; everything else tunes
//! how the work is scheduled and reported.

use std::path::PathBuf;

use crate::error::{EtlError, Result};

/// Default maximum number of rows per Parquet row group
pub const DEFAULT_ROW_GROUP_SIZE: usize = 1024 * 1024;

/// Configuration for a cleaning run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Raw delimited input: a single file or a directory of `*.csv` files
    pub raw_path: PathBuf,
    /// Root of the partitioned Parquet output
    pub clean_path: PathBuf,
    /// Maximum number of partitions written at once
    pub write_concurrency: usize,
    /// Maximum rows per Parquet row group
    pub max_row_group_size: usize,
    /// Field delimiter of the raw input
    pub delimiter: u8,
    /// Draw progress bars on stderr
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            raw_path: PathBuf::new(),
            clean_path: PathBuf::new(),
            write_concurrency: num_cpus::get(),
            max_row_group_size: DEFAULT_ROW_GROUP_SIZE,
            delimiter: b',',
            show_progress: true,
        }
    }
}

impl PipelineConfig {
    /// Create a configuration for the given input and output locations
    #[must_use]
    pub fn new(raw_path: impl Into<PathBuf>, clean_path: impl Into<PathBuf>) -> Self {
        Self {
            raw_path: raw_path.into(),
            clean_path: clean_path.into(),
            ..Default::default()
        }
    }

    /// Builder-style toggle for progress bars
    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Check that the configuration can drive a run
    pub fn validate(&self) -> Result<()> {
        if self.raw_path.as_os_str().is_empty() {
            return Err(EtlError::Config("raw input path is empty".to_string()));
        }
        if self.clean_path.as_os_str().is_empty() {
            return Err(EtlError::Config("clean output path is empty".to_string()));
        }
        if self.raw_path == self.clean_path {
            return Err(EtlError::Config(format!(
                "input and output point at the same location: {}",
                self.raw_path.display()
            )));
        }
        if self.write_concurrency == 0 {
            return Err(EtlError::Config(
                "write concurrency must be at least 1".to_string(),
            ));
        }
        if self.max_row_group_size == 0 {
            return Err(EtlError::Config(
                "row group size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
