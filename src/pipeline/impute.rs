//! Volume imputation.

use rust_decimal::Decimal;

use crate::models::{CleanRecord, quantize};
use crate::schema::columns::VOLUME_PRECISION;

/// US gallons per liter (0.264172)
fn gallons_per_liter() -> Decimal {
    Decimal::new(264_172, 6)
}

const ML_PER_LITER: i64 = 1000;

/// Which volume fields were filled in by [`impute_volumes`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Imputed {
    pub liters: bool,
    pub gallons: bool,
}

/// `ml * bottles / 1000`, rounded to two places
#[must_use]
pub fn liters_from_bottles(bottle_volume_ml: Option<i32>, bottles_sold: Option<i32>) -> Option<Decimal> {
    let total_ml = Decimal::from(bottle_volume_ml?).checked_mul(Decimal::from(bottles_sold?))?;
    quantize(total_ml.checked_div(Decimal::from(ML_PER_LITER))?, VOLUME_PRECISION)
}

/// `liters * 0.264172`, rounded to two places
#[must_use]
pub fn gallons_from_liters(liters: Decimal) -> Option<Decimal> {
    quantize(liters.checked_mul(gallons_per_liter())?, VOLUME_PRECISION)
}

/// Fill missing liters from bottle size and count, then missing gallons
/// from liters. Values already present are never touched.
#[must_use]
pub fn impute_volumes(mut record: CleanRecord) -> (CleanRecord, Imputed) {
    let mut imputed = Imputed::default();

    if record.volume_sold_liters.is_none() {
        record.volume_sold_liters = liters_from_bottles(record.bottle_volume_ml, record.bottles_sold);
        imputed.liters = record.volume_sold_liters.is_some();
    }

    if record.volume_sold_gallons.is_none() {
        record.volume_sold_gallons = record.volume_sold_liters.and_then(gallons_from_liters);
        imputed.gallons = record.volume_sold_gallons.is_some();
    }

    (record, imputed)
}
