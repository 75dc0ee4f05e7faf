//! Tabular census model preserving employer-supplied columns as-is

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A single census cell.
///
/// Loaders only ever produce `Text` and `Empty`; the typed variants are
/// created by the rating pass for derived columns (integer ages, float
/// premiums). Keeping source cells textual means original columns round-trip
/// byte-for-byte to output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    /// Absent value: blank source cell, unknown age, or no matching rate.
    /// Serialized as null, never as zero.
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text content of the cell, if textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Int(n) => write!(f, "{}", n),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Cell::Empty => Ok(()),
        }
    }
}

/// An in-memory census: ordered named columns and one row per member.
///
/// Rows are rectangular (padded with `Empty` at load time). The rating pass
/// only ever appends columns; originals are never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CensusTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl CensusTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    /// Index of the first column with the given (normalized) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a derived column. `values` must be one per row.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<Cell>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.columns.push(name.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index() {
        let table = CensusTable::new(
            vec!["Name".into(), "DOB".into()],
            vec![vec![Cell::Text("A".into()), Cell::Text("1990-01-01".into())]],
        );
        assert_eq!(table.column_index("DOB"), Some(1));
        assert_eq!(table.column_index("Age"), None);
    }

    #[test]
    fn test_push_column_extends_every_row() {
        let mut table = CensusTable::new(
            vec!["Name".into()],
            vec![vec![Cell::Text("A".into())], vec![Cell::Text("B".into())]],
        );
        table.push_column("Age as of Renewal", vec![Cell::Int(30), Cell::Empty]);
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.rows[0][1], Cell::Int(30));
        assert_eq!(table.rows[1][1], Cell::Empty);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Text("x".into()).to_string(), "x");
        assert_eq!(Cell::Int(42).to_string(), "42");
        assert_eq!(Cell::Float(500.5).to_string(), "500.5");
        assert_eq!(Cell::Empty.to_string(), "");
    }
}
