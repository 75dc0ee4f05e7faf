//! Age-banded plan rate tables parsed from carrier rate sheets

mod table;
pub mod loader;

pub use table::{AgeBand, RateTable};
pub use loader::{load_rate_table, load_rate_table_from_reader, RATE_SHEET_SKIP_ROWS};
