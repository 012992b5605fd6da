//! The typed, cleaned transaction record.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A transaction after coercion, imputation and metric derivation.
///
/// Field nullability mirrors what the pipeline can guarantee: text fields
/// that the completeness check requires are plain `String`s, the county pair
/// always carries a value (possibly a sentinel), and numeric fields stay
/// `Option` because a value that fails to parse is nulled rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanRecord {
    pub invoice_number: Option<String>,
    pub date: NaiveDate,
    pub store_number: Option<i32>,
    pub store_name: Option<String>,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub county_number: i32,
    pub county: String,
    pub category: Option<i32>,
    pub category_name: String,
    pub vendor_number: Option<i32>,
    pub vendor_name: String,
    pub item_number: String,
    pub item_description: Option<String>,
    pub pack: Option<i32>,
    pub bottle_volume_ml: Option<i32>,
    pub state_bottle_cost: Option<Decimal>,
    pub state_bottle_retail: Option<Decimal>,
    pub bottles_sold: Option<i32>,
    pub sale_dollars: Option<Decimal>,
    pub volume_sold_liters: Option<Decimal>,
    pub volume_sold_gallons: Option<Decimal>,
    pub profit_per_bottle: Option<Decimal>,
    pub revenue_per_bottle: Option<Decimal>,
    pub total_profit: Option<Decimal>,
    pub year: String,
    pub month: String,
}

impl CleanRecord {
    /// A record dated `date` with every optional field empty.
    ///
    /// Mostly useful for building fixtures; the pipeline itself constructs
    /// records during coercion.
    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        Self {
            invoice_number: None,
            date,
            store_number: None,
            store_name: None,
            address: String::new(),
            city: String::new(),
            zip_code: String::new(),
            county_number: crate::reference::UNKNOWN_COUNTY_NUMBER,
            county: crate::reference::UNKNOWN_COUNTY.to_string(),
            category: None,
            category_name: String::new(),
            vendor_number: None,
            vendor_name: String::new(),
            item_number: String::new(),
            item_description: None,
            pack: None,
            bottle_volume_ml: None,
            state_bottle_cost: None,
            state_bottle_retail: None,
            bottles_sold: None,
            sale_dollars: None,
            volume_sold_liters: None,
            volume_sold_gallons: None,
            profit_per_bottle: None,
            revenue_per_bottle: None,
            total_profit: None,
            year: String::new(),
            month: String::new(),
        }
    }
}
