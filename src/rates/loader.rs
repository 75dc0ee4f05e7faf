//! Load a rate sheet from CSV
//!
//! Carrier rate sheets carry a title block before the real header row; the
//! loader skips those leading rows, normalizes the header it finds, and
//! hands the remaining rows to [`RateTable::from_rows`].

use super::RateTable;
use crate::error::RatingError;
use crate::headers::{duplicate_labels, normalize_labels};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Leading title/header rows before the rate header in a standard carrier
/// rate sheet export.
pub const RATE_SHEET_SKIP_ROWS: usize = 4;

/// Load a rate table from a CSV file, skipping `skip_rows` leading rows.
pub fn load_rate_table<P: AsRef<Path>>(
    path: P,
    skip_rows: usize,
) -> Result<RateTable, RatingError> {
    let file = File::open(path.as_ref())?;
    load_rate_table_from_reader(file, skip_rows)
}

/// Load a rate table from any reader, skipping `skip_rows` leading rows
/// before the header.
pub fn load_rate_table_from_reader<R: std::io::Read>(
    reader: R,
    skip_rows: usize,
) -> Result<RateTable, RatingError> {
    // Title rows are ragged, so read everything headerless and slice
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let row: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        records.push(row);
    }

    if records.len() <= skip_rows {
        log::warn!(
            "rate sheet has {} rows, fewer than the {} skipped title rows; table is empty",
            records.len(),
            skip_rows
        );
        return Ok(RateTable::from_rows::<String>(&[], &[]));
    }

    let headers = normalize_labels(&records[skip_rows]);
    for label in duplicate_labels(&headers) {
        log::warn!(
            "rate sheet headers normalize to duplicate label {:?}; columns kept separate",
            label
        );
    }

    Ok(RateTable::from_rows(&headers, &records[skip_rows + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SHEET: &str = "\
Acme Carrier,,
2026 Renewal Rates,,
Prepared for: Example Employer,,
,,
Age  Range.,Plan X,Plan Y
25 - 29,100.00,110.00
30 - 34,150.00,160.00
";

    #[test]
    fn test_skips_title_rows_and_normalizes_header() {
        let table = load_rate_table_from_reader(SHEET.as_bytes(), RATE_SHEET_SKIP_ROWS).unwrap();
        assert_eq!(table.plans(), &["Plan X".to_string(), "Plan Y".to_string()]);
        assert_eq!(table.bands().len(), 2);
        assert_relative_eq!(table.rate("Plan Y", 31).unwrap(), 160.0);
    }

    #[test]
    fn test_sheet_shorter_than_skip_yields_empty_table() {
        let table = load_rate_table_from_reader("just a title\n".as_bytes(), 4).unwrap();
        assert!(table.plans().is_empty());
        assert!(table.bands().is_empty());
    }

    #[test]
    fn test_zero_skip_reads_from_first_row() {
        let csv = "Age Range,Plan X\n30 - 34,500.00\n";
        let table = load_rate_table_from_reader(csv.as_bytes(), 0).unwrap();
        assert_relative_eq!(table.rate("Plan X", 32).unwrap(), 500.0);
    }
}
