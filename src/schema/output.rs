//! Clean dataset schema definitions

use std::sync::Arc;

use arrow_schema::{DataType, Field, Schema};

use crate::schema::columns::{
    self, BOTTLE_PRICE_PRECISION, PROFIT_PER_BOTTLE_PRECISION, REVENUE_PER_BOTTLE_PRECISION,
    SALE_DOLLARS_PRECISION, TOTAL_PROFIT_PRECISION, VOLUME_PRECISION,
};
use crate::models::types::SCALE;

fn decimal(precision: u8) -> DataType {
    DataType::Decimal128(precision, SCALE as i8)
}

/// Get the Arrow schema for the clean dataset
///
/// `year` and `month` are not part of the file schema; they are encoded in
/// the partition directory names.
#[must_use]
pub fn clean_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(columns::INVOICE_NUMBER, DataType::Utf8, true),
        Field::new(columns::DATE, DataType::Date32, false),
        Field::new(columns::STORE_NUMBER, DataType::Int32, true),
        Field::new(columns::STORE_NAME, DataType::Utf8, true),
        Field::new(columns::ADDRESS, DataType::Utf8, false),
        Field::new(columns::CITY, DataType::Utf8, false),
        Field::new(columns::ZIP_CODE, DataType::Utf8, false),
        Field::new(columns::COUNTY_NUMBER, DataType::Int32, false),
        Field::new(columns::COUNTY, DataType::Utf8, false),
        Field::new(columns::CATEGORY, DataType::Int32, true),
        Field::new(columns::CATEGORY_NAME, DataType::Utf8, false),
        Field::new(columns::VENDOR_NUMBER, DataType::Int32, true),
        Field::new(columns::VENDOR_NAME, DataType::Utf8, false),
        Field::new(columns::ITEM_NUMBER, DataType::Utf8, false),
        Field::new(columns::ITEM_DESCRIPTION, DataType::Utf8, true),
        Field::new(columns::PACK, DataType::Int32, true),
        Field::new(columns::BOTTLE_VOLUME_ML, DataType::Int32, true),
        Field::new(columns::STATE_BOTTLE_COST, decimal(BOTTLE_PRICE_PRECISION), true),
        Field::new(columns::STATE_BOTTLE_RETAIL, decimal(BOTTLE_PRICE_PRECISION), true),
        Field::new(columns::BOTTLES_SOLD, DataType::Int32, true),
        Field::new(columns::SALE_DOLLARS, decimal(SALE_DOLLARS_PRECISION), true),
        Field::new(columns::VOLUME_SOLD_LITERS, decimal(VOLUME_PRECISION), true),
        Field::new(columns::VOLUME_SOLD_GALLONS, decimal(VOLUME_PRECISION), true),
        Field::new(columns::PROFIT_PER_BOTTLE, decimal(PROFIT_PER_BOTTLE_PRECISION), true),
        Field::new(columns::REVENUE_PER_BOTTLE, decimal(REVENUE_PER_BOTTLE_PRECISION), true),
        Field::new(columns::TOTAL_PROFIT, decimal(TOTAL_PROFIT_PRECISION), true),
    ]))
}
