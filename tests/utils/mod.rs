use std::fs;
use std::path::{Path, PathBuf};

use arrow::record_batch::RecordBatch;
use sales_etl::{PartitionKey, PipelineConfig, Result, read_partition};

/// Header row of the public Iowa liquor sales export
pub const HEADER: &str = "Invoice/Item Number,Date,Store Number,Store Name,Address,City,\
Zip Code,Store Location,County Number,County,Category,Category Name,Vendor Number,Vendor Name,\
Item Number,Item Description,Pack,Bottle Volume (ml),State Bottle Cost,State Bottle Retail,\
Bottles Sold,Sale (Dollars),Volume Sold (Liters),Volume Sold (Gallons)";

/// One sale in export layout. Fields are raw text; empty means missing.
#[derive(Debug, Clone)]
pub struct Sale {
    pub invoice: String,
    pub date: String,
    pub address: String,
    pub county_number: String,
    pub county: String,
    pub bottle_volume_ml: String,
    pub cost: String,
    pub retail: String,
    pub bottles: String,
    pub sale_dollars: String,
    pub liters: String,
    pub gallons: String,
}

impl Default for Sale {
    fn default() -> Self {
        Self {
            invoice: "INV-1".into(),
            date: "03/15/2021".into(),
            address: "3221 SE 14TH ST".into(),
            county_number: String::new(),
            county: "Polk".into(),
            bottle_volume_ml: "750".into(),
            cost: "$10.00".into(),
            retail: "$15.00".into(),
            bottles: "12".into(),
            sale_dollars: "$180.00".into(),
            liters: "9.00".into(),
            gallons: "2.38".into(),
        }
    }
}

fn quote(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

impl Sale {
    /// Sale with the given invoice and date, everything else default
    #[must_use]
    pub fn on(invoice: &str, date: &str) -> Self {
        Self {
            invoice: invoice.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    /// The sale as one delimited line
    #[must_use]
    pub fn line(&self) -> String {
        [
            self.invoice.as_str(),
            &self.date,
            "2633",
            "HY-VEE #3 / BDI / DES MOINES",
            &self.address,
            "DES MOINES",
            "50320",
            "POINT (-93.596754 41.554101)",
            &self.county_number,
            &self.county,
            "1031100",
            "AMERICAN VODKAS",
            "260",
            "DIAGEO AMERICAS",
            "38176",
            "TITOS HANDMADE VODKA",
            "12",
            &self.bottle_volume_ml,
            &self.cost,
            &self.retail,
            &self.bottles,
            &self.sale_dollars,
            &self.liters,
            &self.gallons,
        ]
        .iter()
        .map(|cell| quote(cell))
        .collect::<Vec<_>>()
        .join(",")
    }
}

/// Write a delimited file with the export header and the given sales
pub fn write_sales(path: &Path, sales: &[Sale]) -> Result<()> {
    let mut text = String::from(HEADER);
    text.push('\n');
    for sale in sales {
        text.push_str(&sale.line());
        text.push('\n');
    }
    fs::write(path, text)?;
    Ok(())
}

/// Silent configuration for a test run
#[must_use]
pub fn test_config(raw: &Path, clean: &Path) -> PipelineConfig {
    PipelineConfig {
        write_concurrency: 2,
        ..PipelineConfig::new(raw, clean).with_progress(false)
    }
}

/// Every file under `root`, sorted
pub fn files_under(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Read a partition and concatenate its batches
pub fn read_rows(root: &Path, year: i32, month: u32) -> Result<RecordBatch> {
    let batches = read_partition(root, PartitionKey { year, month })?;
    let schema = batches
        .first()
        .map_or_else(sales_etl::clean_schema, RecordBatch::schema);
    Ok(arrow::compute::concat_batches(&schema, &batches)?)
}
