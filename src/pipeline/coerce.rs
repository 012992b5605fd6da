//! Type coercion from raw text to the typed record.

use rust_decimal::Decimal;

use crate::models::{CleanRecord, RawRecord};
use crate::reference::{UNKNOWN_COUNTY, UNKNOWN_COUNTY_NUMBER};
use crate::schema::adapt::{parse_fixed, parse_int, parse_sales_date};
use crate::schema::columns::{BOTTLE_PRICE_PRECISION, SALE_DOLLARS_PRECISION, VOLUME_PRECISION};

fn int(value: Option<&String>) -> Option<i32> {
    value.and_then(|s| parse_int(s))
}

fn fixed(value: Option<&String>, precision: u8) -> Option<Decimal> {
    value.and_then(|s| parse_fixed(s, precision))
}

/// Parse every typed field of an enriched raw record.
///
/// Unparseable values become `None`. The record itself is rejected only
/// when its date does not parse. A county code that fails to parse falls
/// back to the sentinel so the county pair is never null.
#[must_use]
pub fn coerce_record(raw: RawRecord) -> Option<CleanRecord> {
    let date = raw.date.as_deref().and_then(parse_sales_date)?;

    let store_number = int(raw.store_number.as_ref());
    let county_number = int(raw.county_number.as_ref()).unwrap_or(UNKNOWN_COUNTY_NUMBER);
    let category = int(raw.category.as_ref());
    let vendor_number = int(raw.vendor_number.as_ref());
    let pack = int(raw.pack.as_ref());
    let bottle_volume_ml = int(raw.bottle_volume_ml.as_ref());
    let bottles_sold = int(raw.bottles_sold.as_ref());
    let state_bottle_cost = fixed(raw.state_bottle_cost.as_ref(), BOTTLE_PRICE_PRECISION);
    let state_bottle_retail = fixed(raw.state_bottle_retail.as_ref(), BOTTLE_PRICE_PRECISION);
    let sale_dollars = fixed(raw.sale_dollars.as_ref(), SALE_DOLLARS_PRECISION);
    let volume_sold_liters = fixed(raw.volume_sold_liters.as_ref(), VOLUME_PRECISION);
    let volume_sold_gallons = fixed(raw.volume_sold_gallons.as_ref(), VOLUME_PRECISION);

    Some(CleanRecord {
        invoice_number: raw.invoice_number,
        date,
        store_number,
        store_name: raw.store_name,
        address: raw.address.unwrap_or_default(),
        city: raw.city.unwrap_or_default(),
        zip_code: raw.zip_code.unwrap_or_default(),
        county_number,
        county: raw.county.unwrap_or_else(|| UNKNOWN_COUNTY.to_string()),
        category,
        category_name: raw.category_name.unwrap_or_default(),
        vendor_number,
        vendor_name: raw.vendor_name.unwrap_or_default(),
        item_number: raw.item_number.unwrap_or_default(),
        item_description: raw.item_description,
        pack,
        bottle_volume_ml,
        state_bottle_cost,
        state_bottle_retail,
        bottles_sold,
        sale_dollars,
        volume_sold_liters,
        volume_sold_gallons,
        profit_per_bottle: None,
        revenue_per_bottle: None,
        total_profit: None,
        year: String::new(),
        month: String::new(),
    })
}
