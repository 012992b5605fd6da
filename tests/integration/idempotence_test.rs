use std::fs;

use sales_etl::schema::columns;
use sales_etl::utils::arrow::string_values;
use sales_etl::{Result, run_pipeline};

use crate::utils::{Sale, files_under, read_rows, test_config, write_sales};

fn sales() -> Vec<Sale> {
    (1..=40)
        .map(|i| {
            let month = i % 12 + 1;
            let county = ["Polk", "story", "", "Linn", "Nowhere"][i as usize % 5];
            Sale {
                county: county.into(),
                bottles: (i % 13).to_string(),
                ..Sale::on(&format!("INV-{i}"), &format!("{month:02}/{:02}/2021", i % 28 + 1))
            }
        })
        .collect()
}

/// Two runs over the same input produce byte-identical output
#[tokio::test]
async fn test_rerun_is_byte_identical() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("sales.csv");
    let clean = dir.path().join("clean");
    write_sales(&raw, &sales())?;
    let config = test_config(&raw, &clean);

    run_pipeline(&config).await?;
    let first: Vec<_> = files_under(&clean)?
        .into_iter()
        .map(|p| fs::read(&p).map(|bytes| (p, bytes)))
        .collect::<std::io::Result<_>>()?;

    run_pipeline(&config).await?;
    let second: Vec<_> = files_under(&clean)?
        .into_iter()
        .map(|p| fs::read(&p).map(|bytes| (p, bytes)))
        .collect::<std::io::Result<_>>()?;

    assert_eq!(first.len(), 12);
    assert_eq!(first, second);
    Ok(())
}

/// A rerun replaces the partitions it covers and leaves the others alone
#[tokio::test]
async fn test_rerun_overwrites_only_its_partitions() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("sales.csv");
    let clean = dir.path().join("clean");

    write_sales(
        &raw,
        &[Sale::on("OLD-MARCH", "03/01/2021"), Sale::on("OLD-APRIL", "04/01/2021")],
    )?;
    run_pipeline(&test_config(&raw, &clean)).await?;
    let stale = clean.join("year=2021").join("month=3").join("stale.parquet");
    fs::write(&stale, b"leftover")?;

    write_sales(&raw, &[Sale::on("NEW-MARCH", "03/05/2021")])?;
    run_pipeline(&test_config(&raw, &clean)).await?;

    assert!(!stale.exists());
    let march = read_rows(&clean, 2021, 3)?;
    assert_eq!(
        string_values(&march, columns::INVOICE_NUMBER)?,
        vec![Some("NEW-MARCH".into())]
    );
    let april = read_rows(&clean, 2021, 4)?;
    assert_eq!(
        string_values(&april, columns::INVOICE_NUMBER)?,
        vec![Some("OLD-APRIL".into())]
    );
    Ok(())
}
