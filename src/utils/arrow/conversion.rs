//! Conversions between clean records and Arrow record batches
//!
//! Records are turned into columnar arrays one column at a time, in the
//! order of [`clean_schema`]. The column readers go the other way and are
//! used to inspect written partitions.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Date32Array, Decimal128Array, Int32Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EtlError, Result};
use crate::models::types::SCALE;
use crate::models::{CleanRecord, from_unscaled, unscaled};
use crate::schema::clean_schema;

/// Days from 0001-01-01 to 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Convert a `NaiveDate` to an Arrow Date32 value
#[must_use]
pub fn naive_date_to_date32(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

fn utf8<'a>(values: impl Iterator<Item = Option<&'a str>>) -> ArrayRef {
    Arc::new(values.collect::<StringArray>())
}

fn int32(values: impl Iterator<Item = Option<i32>>) -> ArrayRef {
    Arc::new(values.collect::<Int32Array>())
}

fn decimal(values: impl Iterator<Item = Option<Decimal>>, data_type: &DataType) -> Result<ArrayRef> {
    let DataType::Decimal128(precision, scale) = data_type else {
        return Err(EtlError::Schema(format!(
            "expected a decimal column, found {data_type}"
        )));
    };
    let array = values
        .map(|v| v.map(unscaled))
        .collect::<Decimal128Array>()
        .with_precision_and_scale(*precision, *scale)?;
    array.validate_decimal_precision(*precision)?;
    Ok(Arc::new(array))
}

/// Build a record batch in the clean schema from a slice of records
///
/// # Errors
/// Returns an error if a value does not fit its column, which the pipeline
/// rules out by nulling out-of-range values beforehand.
pub fn records_to_batch(records: &[CleanRecord]) -> Result<RecordBatch> {
    let schema = clean_schema();
    let dt = |index: usize| schema.field(index).data_type().clone();
    let r = || records.iter();

    let columns: Vec<ArrayRef> = vec![
        utf8(r().map(|x| x.invoice_number.as_deref())),
        Arc::new(r().map(|x| Some(naive_date_to_date32(x.date))).collect::<Date32Array>()),
        int32(r().map(|x| x.store_number)),
        utf8(r().map(|x| x.store_name.as_deref())),
        utf8(r().map(|x| Some(x.address.as_str()))),
        utf8(r().map(|x| Some(x.city.as_str()))),
        utf8(r().map(|x| Some(x.zip_code.as_str()))),
        int32(r().map(|x| Some(x.county_number))),
        utf8(r().map(|x| Some(x.county.as_str()))),
        int32(r().map(|x| x.category)),
        utf8(r().map(|x| Some(x.category_name.as_str()))),
        int32(r().map(|x| x.vendor_number)),
        utf8(r().map(|x| Some(x.vendor_name.as_str()))),
        utf8(r().map(|x| Some(x.item_number.as_str()))),
        utf8(r().map(|x| x.item_description.as_deref())),
        int32(r().map(|x| x.pack)),
        int32(r().map(|x| x.bottle_volume_ml)),
        decimal(r().map(|x| x.state_bottle_cost), &dt(17))?,
        decimal(r().map(|x| x.state_bottle_retail), &dt(18))?,
        int32(r().map(|x| x.bottles_sold)),
        decimal(r().map(|x| x.sale_dollars), &dt(20))?,
        decimal(r().map(|x| x.volume_sold_liters), &dt(21))?,
        decimal(r().map(|x| x.volume_sold_gallons), &dt(22))?,
        decimal(r().map(|x| x.profit_per_bottle), &dt(23))?,
        decimal(r().map(|x| x.revenue_per_bottle), &dt(24))?,
        decimal(r().map(|x| x.total_profit), &dt(25))?,
    ];

    Ok(RecordBatch::try_new(schema, columns)?)
}

fn column<'a, T: 'static>(batch: &'a RecordBatch, name: &str) -> Result<&'a T> {
    batch
        .column_by_name(name)
        .ok_or_else(|| EtlError::Schema(format!("column {name} not found in batch")))?
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| EtlError::Schema(format!("column {name} has an unexpected type")))
}

/// Read a Utf8 column as optional strings
pub fn string_values(batch: &RecordBatch, name: &str) -> Result<Vec<Option<String>>> {
    let array = column::<StringArray>(batch, name)?;
    Ok(array.iter().map(|v| v.map(str::to_string)).collect())
}

/// Read an Int32 column
pub fn int32_values(batch: &RecordBatch, name: &str) -> Result<Vec<Option<i32>>> {
    Ok(column::<Int32Array>(batch, name)?.iter().collect())
}

/// Read a Date32 column
pub fn date_values(batch: &RecordBatch, name: &str) -> Result<Vec<Option<NaiveDate>>> {
    let array = column::<Date32Array>(batch, name)?;
    Ok((0..array.len())
        .map(|i| if array.is_null(i) { None } else { array.value_as_date(i) })
        .collect())
}

/// Read a two-place Decimal128 column
pub fn decimal_values(batch: &RecordBatch, name: &str) -> Result<Vec<Option<Decimal>>> {
    let array = column::<Decimal128Array>(batch, name)?;
    if array.scale() != SCALE as i8 {
        return Err(EtlError::Schema(format!(
            "column {name} has scale {}, expected {SCALE}",
            array.scale()
        )));
    }
    array
        .iter()
        .map(|v| {
            v.map(|raw| {
                from_unscaled(raw).ok_or_else(|| {
                    EtlError::Schema(format!("column {name} holds {raw}, too wide for a decimal"))
                })
            })
            .transpose()
        })
        .collect()
}
