//! Async orchestration of a pipeline run

pub mod loader;
pub mod parallel_ops;

pub use loader::run_pipeline;
pub use parallel_ops::write_partitions_async;
