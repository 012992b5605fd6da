//! Arrow data handling utilities

pub mod conversion;

pub use conversion::{
    date_values, decimal_values, int32_values, naive_date_to_date32, records_to_batch,
    string_values,
};
