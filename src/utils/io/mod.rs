//! IO utilities for the delimited input and the Parquet output

pub mod csv;
pub mod parquet;

pub use self::csv::{find_csv_files, read_raw_file, read_raw_records};
pub use self::parquet::{
    PART_FILE_NAME, partition_dir, read_parquet, read_partition, write_partition,
    writer_properties,
};
