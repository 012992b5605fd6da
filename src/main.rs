use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use log::info;
use sales_etl::config::DEFAULT_ROW_GROUP_SIZE;
use sales_etl::{PipelineConfig, run_pipeline};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

/// Clean the Iowa liquor sales export into partitioned Parquet
#[derive(Debug, Parser)]
#[command(name = "sales-etl", version, about)]
struct Args {
    /// Raw delimited input: a file or a directory of CSV files
    #[arg(long, env = "RAW_PATH")]
    raw_path: PathBuf,

    /// Root directory of the partitioned output
    #[arg(long, env = "CLEAN_PATH")]
    clean_path: PathBuf,

    /// Maximum number of partitions written concurrently
    #[arg(long, default_value_t = num_cpus::get())]
    write_concurrency: usize,

    /// Maximum rows per Parquet row group
    #[arg(long, default_value_t = DEFAULT_ROW_GROUP_SIZE)]
    row_group_size: usize,

    /// Field delimiter of the raw input
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Do not draw progress bars
    #[arg(long)]
    no_progress: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<PipelineConfig> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter);
        }
        Ok(PipelineConfig {
            write_concurrency: self.write_concurrency,
            max_row_group_size: self.row_group_size,
            delimiter: self.delimiter as u8,
            show_progress: !self.no_progress && std::io::stderr().is_terminal(),
            ..PipelineConfig::new(self.raw_path, self.clean_path)
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config()?;
    info!(
        "Cleaning {} into {}",
        config.raw_path.display(),
        config.clean_path.display()
    );

    let report = run_pipeline(&config).await.with_context(|| {
        format!(
            "failed to clean {} into {}",
            config.raw_path.display(),
            config.clean_path.display()
        )
    })?;
    info!(
        "Wrote {} rows in {} partitions",
        report.rows_written, report.partitions_written
    );

    println!("RAW: {}", config.raw_path.display());
    println!("CLEAN: {}", config.clean_path.display());
    Ok(())
}
