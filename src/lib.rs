//! Cleaning pipeline for Iowa liquor sales.
//!
//! Reads the raw delimited export, validates and enriches each transaction,
//! coerces it to typed values, imputes volumes, derives per-bottle metrics
//! and writes the result as Parquet partitioned by year and month.

pub mod async_io;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reference;
pub mod schema;
pub mod utils;

// Core types
pub use config::PipelineConfig;
pub use error::{EtlError, Result};
pub use models::{CleanRecord, RawRecord};
pub use rust_decimal::Decimal;
pub use pipeline::{PartitionKey, PipelineReport, process_record, transform_records};
pub use reference::CountyLookup;
pub use schema::clean_schema;

// Arrow types
pub use arrow::record_batch::RecordBatch;

// IO
pub use utils::io::{read_parquet, read_partition, read_raw_records, write_partition};

// Async functionality
pub use async_io::{run_pipeline, write_partitions_async};
