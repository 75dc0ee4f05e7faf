//! Load a census from CSV
//!
//! Headers are normalized on the way in so everything downstream can look
//! columns up by canonical name. Cell values stay textual; date coercion and
//! age derivation belong to the rating pass.

use super::{Cell, CensusTable};
use crate::error::RatingError;
use crate::headers::{duplicate_labels, normalize_labels};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Load a census from a CSV file.
pub fn load_census<P: AsRef<Path>>(path: P) -> Result<CensusTable, RatingError> {
    let file = File::open(path.as_ref())?;
    load_census_from_reader(file)
}

/// Load a census from any reader (string buffer, network stream).
pub fn load_census_from_reader<R: std::io::Read>(reader: R) -> Result<CensusTable, RatingError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let raw_headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let columns = normalize_labels(&raw_headers);

    for label in duplicate_labels(&columns) {
        log::warn!(
            "census headers normalize to duplicate label {:?}; columns kept separate, lookups use the first",
            label
        );
    }

    let width = columns.len();
    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let mut row: Vec<Cell> = record
            .iter()
            .map(|field| {
                if field.trim().is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(field.to_string())
                }
            })
            .collect();
        // Keep rows rectangular regardless of ragged source data
        row.truncate(width);
        row.resize(width, Cell::Empty);
        rows.push(row);
    }

    Ok(CensusTable::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_normalized_on_load() {
        let csv = "Name,DOB.,Home\u{a0} Dept\nAlice,1990-01-01,Claims\n";
        let census = load_census_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(census.columns, vec!["Name", "DOB", "Home Dept"]);
        assert_eq!(census.rows.len(), 1);
        assert_eq!(census.rows[0][1], Cell::Text("1990-01-01".into()));
    }

    #[test]
    fn test_blank_cells_become_empty() {
        let csv = "Name,DOB\nBob,\n";
        let census = load_census_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(census.rows[0][1], Cell::Empty);
    }

    #[test]
    fn test_ragged_rows_padded() {
        let csv = "Name,DOB,Dept\nCarol,1985-06-01\n";
        let census = load_census_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(census.rows[0].len(), 3);
        assert_eq!(census.rows[0][2], Cell::Empty);
    }

    #[test]
    fn test_row_order_preserved() {
        let csv = "Name\nZed\nAmy\nZed\n";
        let census = load_census_from_reader(csv.as_bytes()).unwrap();
        let names: Vec<_> = census
            .rows
            .iter()
            .map(|r| r[0].as_text().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Zed", "Amy", "Zed"]);
    }
}
