use chrono::NaiveDate;
use sales_etl::schema::columns;
use sales_etl::utils::arrow::{date_values, decimal_values, int32_values, string_values};
use sales_etl::{Decimal, Result, run_pipeline};

use crate::utils::{HEADER, Sale, files_under, read_rows, test_config, write_sales};

fn cents(c: i64) -> Option<Decimal> {
    Some(Decimal::new(c, 2))
}

fn sample_sales() -> Vec<Sale> {
    vec![
        Sale {
            liters: "N/A".into(),
            gallons: "N/A".into(),
            ..Sale::on("INV-1", "03/15/2021")
        },
        Sale {
            county: String::new(),
            ..Sale::on("INV-2", "03/20/2021")
        },
        Sale {
            county: " black hawk ".into(),
            ..Sale::on("INV-3", "12/01/2020")
        },
        Sale {
            address: String::new(),
            ..Sale::on("INV-4", "03/16/2021")
        },
        Sale::on("INV-5", "2021-03-15"),
        Sale {
            bottles: "0".into(),
            sale_dollars: "$0.00".into(),
            ..Sale::on("INV-6", "03/31/2021")
        },
        Sale {
            liters: String::new(),
            ..Sale::on("INV-7", "03/31/2021")
        },
    ]
}

/// Full run over a small export: drops, enrichment, imputation and metrics.
/// Volumes are mandatory text, so imputation applies to unparseable values.
#[tokio::test]
async fn test_end_to_end_run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("sales.csv");
    let clean = dir.path().join("clean");
    write_sales(&raw, &sample_sales())?;

    let report = run_pipeline(&test_config(&raw, &clean)).await?;
    assert_eq!(report.rows_read, 7);
    assert_eq!(report.dropped_incomplete, 2);
    assert_eq!(report.dropped_invalid_date, 1);
    assert_eq!(report.rows_written, 4);
    assert_eq!(report.partitions_written, 2);
    assert_eq!(report.county_lookup_misses, 1);
    assert_eq!(report.liters_imputed, 1);
    assert_eq!(report.gallons_imputed, 1);

    let files = files_under(&clean)?;
    let relative: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(&clean).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(
        relative,
        [
            "year=2020/month=12/part-00000.parquet",
            "year=2021/month=3/part-00000.parquet"
        ]
    );

    let march = read_rows(&clean, 2021, 3)?;
    assert_eq!(
        string_values(&march, columns::INVOICE_NUMBER)?,
        vec![Some("INV-1".into()), Some("INV-2".into()), Some("INV-6".into())]
    );
    assert_eq!(
        string_values(&march, columns::COUNTY)?,
        vec![Some("POLK".into()), Some("UNKNOWN".into()), Some("POLK".into())]
    );
    assert_eq!(int32_values(&march, columns::COUNTY_NUMBER)?, vec![Some(77), Some(-1), Some(77)]);
    assert_eq!(
        date_values(&march, columns::DATE)?[0],
        NaiveDate::from_ymd_opt(2021, 3, 15)
    );

    assert_eq!(decimal_values(&march, columns::VOLUME_SOLD_LITERS)?[0], cents(900));
    assert_eq!(decimal_values(&march, columns::VOLUME_SOLD_GALLONS)?[0], cents(238));
    assert_eq!(decimal_values(&march, columns::PROFIT_PER_BOTTLE)?[0], cents(500));
    assert_eq!(decimal_values(&march, columns::REVENUE_PER_BOTTLE)?[0], cents(1500));
    assert_eq!(decimal_values(&march, columns::TOTAL_PROFIT)?[0], cents(6000));

    // zero bottles: no division, zero revenue
    assert_eq!(decimal_values(&march, columns::REVENUE_PER_BOTTLE)?[2], cents(0));
    assert_eq!(decimal_values(&march, columns::TOTAL_PROFIT)?[2], cents(0));

    let december = read_rows(&clean, 2020, 12)?;
    assert_eq!(
        string_values(&december, columns::COUNTY)?,
        vec![Some("BLACK_HAWK".into())]
    );
    assert_eq!(int32_values(&december, columns::COUNTY_NUMBER)?, vec![Some(7)]);
    Ok(())
}

/// Supplied volumes and county codes are never overwritten
#[tokio::test]
async fn test_supplied_values_are_kept() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("sales.csv");
    let clean = dir.path().join("clean");
    write_sales(
        &raw,
        &[Sale {
            county_number: "12".into(),
            liters: "10.00".into(),
            gallons: "1,000.5".into(),
            sale_dollars: "$1,200.00".into(),
            ..Sale::default()
        }],
    )?;

    let report = run_pipeline(&test_config(&raw, &clean)).await?;
    assert_eq!(report.liters_imputed, 0);
    assert_eq!(report.gallons_imputed, 0);

    let march = read_rows(&clean, 2021, 3)?;
    assert_eq!(int32_values(&march, columns::COUNTY_NUMBER)?, vec![Some(12)]);
    assert_eq!(decimal_values(&march, columns::VOLUME_SOLD_LITERS)?, vec![cents(1000)]);
    assert_eq!(decimal_values(&march, columns::VOLUME_SOLD_GALLONS)?, vec![cents(100_050)]);
    assert_eq!(decimal_values(&march, columns::SALE_DOLLARS)?, vec![cents(120_000)]);
    assert_eq!(decimal_values(&march, columns::REVENUE_PER_BOTTLE)?, vec![cents(10_000)]);
    Ok(())
}

/// A directory of exports is read in file name order
#[tokio::test]
async fn test_directory_input() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("raw");
    let clean = dir.path().join("clean");
    std::fs::create_dir(&raw)?;
    write_sales(&raw.join("2021-b.csv"), &[Sale::on("INV-B", "03/02/2021")])?;
    write_sales(&raw.join("2021-a.csv"), &[Sale::on("INV-A", "03/09/2021")])?;

    let report = run_pipeline(&test_config(&raw, &clean)).await?;
    assert_eq!(report.rows_written, 2);

    let march = read_rows(&clean, 2021, 3)?;
    assert_eq!(
        string_values(&march, columns::INVOICE_NUMBER)?,
        vec![Some("INV-A".into()), Some("INV-B".into())]
    );
    Ok(())
}

/// Input where every row is dropped writes no partitions
#[tokio::test]
async fn test_all_rows_dropped() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("sales.csv");
    let clean = dir.path().join("clean");
    write_sales(&raw, &[Sale::on("INV-1", "15/03/2021")])?;

    let report = run_pipeline(&test_config(&raw, &clean)).await?;
    assert_eq!(report.rows_written, 0);
    assert_eq!(report.partitions_written, 0);
    assert!(files_under(&clean)?.is_empty());
    Ok(())
}

/// A byte that is not UTF-8 is replaced in its cell and every row is kept
#[tokio::test]
async fn test_latin1_byte_is_replaced() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("sales.csv");
    let clean = dir.path().join("clean");

    let second = Sale::on("INV-2", "03/16/2021").line();
    let (before, after) = second.split_once("HANDMADE").unwrap();
    let mut bytes = format!("{HEADER}\n{}\n{before}", Sale::default().line()).into_bytes();
    bytes.extend_from_slice(b"CAF\xE9");
    bytes.extend_from_slice(after.as_bytes());
    bytes.push(b'\n');
    std::fs::write(&raw, bytes)?;

    let report = run_pipeline(&test_config(&raw, &clean)).await?;
    assert_eq!(report.rows_read, 2);
    assert_eq!(report.rows_written, 2);

    let march = read_rows(&clean, 2021, 3)?;
    assert_eq!(
        string_values(&march, columns::ITEM_DESCRIPTION)?,
        vec![
            Some("TITOS HANDMADE VODKA".into()),
            Some("TITOS CAF\u{FFFD} VODKA".into())
        ]
    );
    Ok(())
}
