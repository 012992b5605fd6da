//! Raw transaction rows as read from the delimited input.

use smallvec::SmallVec;

use crate::schema::columns;

/// One input line with every value still as text.
///
/// Empty or whitespace-only cells are stored as `None`, so "missing" and
/// "null" mean the same thing from here on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub invoice_number: Option<String>,
    pub date: Option<String>,
    pub store_number: Option<String>,
    pub store_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub county_number: Option<String>,
    pub county: Option<String>,
    pub category: Option<String>,
    pub category_name: Option<String>,
    pub vendor_number: Option<String>,
    pub vendor_name: Option<String>,
    pub item_number: Option<String>,
    pub item_description: Option<String>,
    pub pack: Option<String>,
    pub bottle_volume_ml: Option<String>,
    pub state_bottle_cost: Option<String>,
    pub state_bottle_retail: Option<String>,
    pub bottles_sold: Option<String>,
    pub sale_dollars: Option<String>,
    pub volume_sold_liters: Option<String>,
    pub volume_sold_gallons: Option<String>,
}

impl RawRecord {
    /// Raw text of a column by canonical name, for columns the record carries
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        let value = match column {
            columns::INVOICE_NUMBER => &self.invoice_number,
            columns::DATE => &self.date,
            columns::STORE_NUMBER => &self.store_number,
            columns::STORE_NAME => &self.store_name,
            columns::ADDRESS => &self.address,
            columns::CITY => &self.city,
            columns::ZIP_CODE => &self.zip_code,
            columns::COUNTY_NUMBER => &self.county_number,
            columns::COUNTY => &self.county,
            columns::CATEGORY => &self.category,
            columns::CATEGORY_NAME => &self.category_name,
            columns::VENDOR_NUMBER => &self.vendor_number,
            columns::VENDOR_NAME => &self.vendor_name,
            columns::ITEM_NUMBER => &self.item_number,
            columns::ITEM_DESCRIPTION => &self.item_description,
            columns::PACK => &self.pack,
            columns::BOTTLE_VOLUME_ML => &self.bottle_volume_ml,
            columns::STATE_BOTTLE_COST => &self.state_bottle_cost,
            columns::STATE_BOTTLE_RETAIL => &self.state_bottle_retail,
            columns::BOTTLES_SOLD => &self.bottles_sold,
            columns::SALE_DOLLARS => &self.sale_dollars,
            columns::VOLUME_SOLD_LITERS => &self.volume_sold_liters,
            columns::VOLUME_SOLD_GALLONS => &self.volume_sold_gallons,
            _ => return None,
        };
        value.as_deref()
    }

    /// Mutable slot for a column by canonical name
    pub fn slot_mut(&mut self, column: &str) -> Option<&mut Option<String>> {
        let slot = match column {
            columns::INVOICE_NUMBER => &mut self.invoice_number,
            columns::DATE => &mut self.date,
            columns::STORE_NUMBER => &mut self.store_number,
            columns::STORE_NAME => &mut self.store_name,
            columns::ADDRESS => &mut self.address,
            columns::CITY => &mut self.city,
            columns::ZIP_CODE => &mut self.zip_code,
            columns::COUNTY_NUMBER => &mut self.county_number,
            columns::COUNTY => &mut self.county,
            columns::CATEGORY => &mut self.category,
            columns::CATEGORY_NAME => &mut self.category_name,
            columns::VENDOR_NUMBER => &mut self.vendor_number,
            columns::VENDOR_NAME => &mut self.vendor_name,
            columns::ITEM_NUMBER => &mut self.item_number,
            columns::ITEM_DESCRIPTION => &mut self.item_description,
            columns::PACK => &mut self.pack,
            columns::BOTTLE_VOLUME_ML => &mut self.bottle_volume_ml,
            columns::STATE_BOTTLE_COST => &mut self.state_bottle_cost,
            columns::STATE_BOTTLE_RETAIL => &mut self.state_bottle_retail,
            columns::BOTTLES_SOLD => &mut self.bottles_sold,
            columns::SALE_DOLLARS => &mut self.sale_dollars,
            columns::VOLUME_SOLD_LITERS => &mut self.volume_sold_liters,
            columns::VOLUME_SOLD_GALLONS => &mut self.volume_sold_gallons,
            _ => return None,
        };
        Some(slot)
    }

    /// Set a column from a raw cell, treating blank text as null
    pub fn set(&mut self, column: &str, cell: &str) {
        if let Some(slot) = self.slot_mut(column) {
            *slot = non_blank(cell);
        }
    }

    /// Mandatory columns whose value is null
    #[must_use]
    pub fn missing_mandatory(&self) -> SmallVec<[&'static str; 4]> {
        columns::MANDATORY_COLUMNS
            .iter()
            .copied()
            .filter(|column| self.get(column).is_none())
            .collect()
    }
}

/// Blank cells become null; anything else is kept verbatim
#[must_use]
pub fn non_blank(cell: &str) -> Option<String> {
    if cell.trim().is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}
