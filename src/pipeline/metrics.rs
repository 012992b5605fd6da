//! Derived per-record business metrics.

use rust_decimal::Decimal;

use crate::models::{CleanRecord, quantize};
use crate::schema::columns::{
    PROFIT_PER_BOTTLE_PRECISION, REVENUE_PER_BOTTLE_PRECISION, TOTAL_PROFIT_PRECISION,
};

/// Retail minus cost; null if either is null
#[must_use]
pub fn profit_per_bottle(retail: Option<Decimal>, cost: Option<Decimal>) -> Option<Decimal> {
    quantize(retail?.checked_sub(cost?)?, PROFIT_PER_BOTTLE_PRECISION)
}

/// Sale dollars over bottles sold, rounded to two places.
///
/// Zero whenever the bottle count is null or not positive, so the value
/// is never a division by zero.
#[must_use]
pub fn revenue_per_bottle(sale_dollars: Option<Decimal>, bottles_sold: Option<i32>) -> Option<Decimal> {
    match bottles_sold {
        Some(bottles) if bottles > 0 => quantize(
            sale_dollars?.checked_div(Decimal::from(bottles))?,
            REVENUE_PER_BOTTLE_PRECISION,
        ),
        _ => quantize(Decimal::ZERO, REVENUE_PER_BOTTLE_PRECISION),
    }
}

/// Profit per bottle times bottles sold; null if either is null
#[must_use]
pub fn total_profit(profit_per_bottle: Option<Decimal>, bottles_sold: Option<i32>) -> Option<Decimal> {
    quantize(
        profit_per_bottle?.checked_mul(Decimal::from(bottles_sold?))?,
        TOTAL_PROFIT_PRECISION,
    )
}

/// Attach the three derived metrics to a record
#[must_use]
pub fn derive_metrics(mut record: CleanRecord) -> CleanRecord {
    let profit = profit_per_bottle(record.state_bottle_retail, record.state_bottle_cost);
    record.revenue_per_bottle = revenue_per_bottle(record.sale_dollars, record.bottles_sold);
    record.total_profit = total_profit(profit, record.bottles_sold);
    record.profit_per_bottle = profit;
    record
}
