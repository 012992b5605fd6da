//! Canonical column names and the fixed column-level rules.

pub const INVOICE_ITEM_NUMBER: &str = "Invoice/Item_Number";
pub const INVOICE_NUMBER: &str = "Invoice_Number";
pub const DATE: &str = "Date";
pub const STORE_NUMBER: &str = "Store_Number";
pub const STORE_NAME: &str = "Store_Name";
pub const ADDRESS: &str = "Address";
pub const CITY: &str = "City";
pub const ZIP_CODE: &str = "Zip_Code";
pub const STORE_LOCATION: &str = "Store_Location";
pub const COUNTY_NUMBER: &str = "County_Number";
pub const COUNTY: &str = "County";
pub const CATEGORY: &str = "Category";
pub const CATEGORY_NAME: &str = "Category_Name";
pub const VENDOR_NUMBER: &str = "Vendor_Number";
pub const VENDOR_NAME: &str = "Vendor_Name";
pub const ITEM_NUMBER: &str = "Item_Number";
pub const ITEM_DESCRIPTION: &str = "Item_Description";
pub const PACK: &str = "Pack";
pub const BOTTLE_VOLUME_ML: &str = "Bottle_Volume_ml";
pub const STATE_BOTTLE_COST: &str = "State_Bottle_Cost";
pub const STATE_BOTTLE_RETAIL: &str = "State_Bottle_Retail";
pub const BOTTLES_SOLD: &str = "Bottles_Sold";
pub const SALE_DOLLARS: &str = "Sale_Dollars";
pub const VOLUME_SOLD_LITERS: &str = "Volume_Sold_Liters";
pub const VOLUME_SOLD_GALLONS: &str = "Volume_Sold_Gallons";

pub const PROFIT_PER_BOTTLE: &str = "profit_per_bottle";
pub const REVENUE_PER_BOTTLE: &str = "Revenue_per_Bottle";
pub const TOTAL_PROFIT: &str = "total_profit";
pub const YEAR: &str = "year";
pub const MONTH: &str = "month";

/// Precision of bottle cost and retail price
pub const BOTTLE_PRICE_PRECISION: u8 = 10;
/// Precision of the sale total
pub const SALE_DOLLARS_PRECISION: u8 = 12;
/// Precision of the liter and gallon volumes
pub const VOLUME_PRECISION: u8 = 10;
/// Precision of the per-bottle profit (difference of two bottle prices)
pub const PROFIT_PER_BOTTLE_PRECISION: u8 = 11;
/// Precision of the per-bottle revenue (never wider than the sale total)
pub const REVENUE_PER_BOTTLE_PRECISION: u8 = 12;
/// Precision of the total profit (per-bottle profit times a 32-bit count)
pub const TOTAL_PROFIT_PRECISION: u8 = 22;

/// Columns whose raw value must be present for a record to be kept
pub const MANDATORY_COLUMNS: [&str; 15] = [
    ADDRESS,
    CITY,
    ZIP_CODE,
    VOLUME_SOLD_LITERS,
    VOLUME_SOLD_GALLONS,
    SALE_DOLLARS,
    BOTTLES_SOLD,
    STATE_BOTTLE_RETAIL,
    BOTTLE_VOLUME_ML,
    PACK,
    ITEM_NUMBER,
    VENDOR_NAME,
    VENDOR_NUMBER,
    CATEGORY_NAME,
    CATEGORY,
];

/// Columns the input must provide, after renaming
pub const REQUIRED_COLUMNS: [&str; 21] = [
    INVOICE_NUMBER,
    DATE,
    STORE_NUMBER,
    ADDRESS,
    CITY,
    ZIP_CODE,
    COUNTY_NUMBER,
    COUNTY,
    CATEGORY,
    CATEGORY_NAME,
    VENDOR_NUMBER,
    VENDOR_NAME,
    ITEM_NUMBER,
    PACK,
    BOTTLE_VOLUME_ML,
    STATE_BOTTLE_COST,
    STATE_BOTTLE_RETAIL,
    BOTTLES_SOLD,
    SALE_DOLLARS,
    VOLUME_SOLD_LITERS,
    VOLUME_SOLD_GALLONS,
];

/// Columns carried through when present but not required
pub const OPTIONAL_COLUMNS: [&str; 2] = [STORE_NAME, ITEM_DESCRIPTION];

/// Columns removed from every record
pub const DROPPED_COLUMNS: [&str; 1] = [STORE_LOCATION];

/// Fixed column renames, applied after normalization
pub const RENAMES: [(&str, &str); 1] = [(INVOICE_ITEM_NUMBER, INVOICE_NUMBER)];

/// Alternative spellings of unit-bearing columns found in the public export
pub const ALIASES: [(&str, &str); 4] = [
    ("Volume_Sold_(Liters)", VOLUME_SOLD_LITERS),
    ("Volume_Sold_(Gallons)", VOLUME_SOLD_GALLONS),
    ("Sale_(Dollars)", SALE_DOLLARS),
    ("Bottle_Volume_(ml)", BOTTLE_VOLUME_ML),
];

/// Map an aliased header onto its canonical name
#[must_use]
pub fn canonical_name(normalized: &str) -> &str {
    ALIASES
        .iter()
        .find(|&&(alias, _)| alias == normalized)
        .map_or(normalized, |&(_, canonical)| canonical)
}
