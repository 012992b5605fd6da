//! Raw input columns, their binding to records, and the clean output schema.

pub mod adapt;
pub mod binding;
pub mod columns;
pub mod normalize;
pub mod output;

pub use binding::{RawSchema, drop_columns, rename_columns};
pub use normalize::{normalize_column_name, normalize_headers};
pub use output::clean_schema;
