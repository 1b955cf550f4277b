//! Tabular result model for metric output.
//!
//! Metric functions return a [`DataTable`], a small named-column table whose
//! cells are [`CellValue`]s. The model is deliberately generic: the
//! orchestrator and any presentation layer can consume every metric's output
//! through the same shape without knowing which metric produced it.
//!
//! # Examples
//!
//! ```
//! use peoplelens::metrics::table::{CellValue, DataTable};
//!
//! let mut table = DataTable::new(["Year", "Headcount"]);
//! table.push_row(vec![2021.into(), 42.into()]).unwrap();
//! table.push_row(vec![2022.into(), 57.into()]).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.cell(1, "Headcount").and_then(CellValue::as_integer), Some(57));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PeopleLensError, Result};

/// A single cell of a result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value (grouping keys such as department or gender)
    Text(String),
    /// Integer value (years, counts)
    Integer(i64),
    /// Floating point value (rates, averages)
    Float(f64),
    /// Explicit absence of a value
    Null,
}

impl CellValue {
    /// Get the value as text, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer, if this is an integer cell.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float. Integer cells coerce losslessly.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(f) => Some(*f),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Check whether this is the null cell.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.2}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Integer(value as i64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

/// A named-column table of cells, the output shape of every metric.
///
/// Rows are ordered and column arity is enforced on insertion. An empty
/// table (columns but no rows) is the normal result of aggregating an empty
/// dataset, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// Create an empty table with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DataTable {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. The row must have exactly one cell per column.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(PeopleLensError::table(format!(
                "row has {} cells, table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Get the column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the rows.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Get the index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get a cell by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Collect one column's cells in row order.
    pub fn column_values(&self, name: &str) -> Vec<&CellValue> {
        match self.column_index(name) {
            Some(index) => self.rows.iter().filter_map(|r| r.get(index)).collect(),
            None => Vec::new(),
        }
    }

    /// Keep only the rows for which the predicate holds.
    pub fn retain_rows<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&[CellValue]) -> bool,
    {
        self.rows.retain(|row| predicate(row));
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_enforces_arity() {
        let mut table = DataTable::new(["A", "B"]);
        assert!(table.push_row(vec![1.into(), 2.into()]).is_ok());
        assert!(table.push_row(vec![1.into()]).is_err());
        assert!(table.push_row(vec![1.into(), 2.into(), 3.into()]).is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_cell_lookup() {
        let mut table = DataTable::new(["Department", "Headcount"]);
        table.push_row(vec!["IT".into(), 12.into()]).unwrap();

        assert_eq!(table.cell(0, "Department").and_then(CellValue::as_text), Some("IT"));
        assert_eq!(table.cell(0, "Headcount").and_then(CellValue::as_integer), Some(12));
        assert!(table.cell(0, "Missing").is_none());
        assert!(table.cell(1, "Department").is_none());
    }

    #[test]
    fn test_integer_coerces_to_float() {
        let cell = CellValue::Integer(7);
        assert_eq!(cell.as_float(), Some(7.0));
        assert_eq!(cell.as_text(), None);
    }

    #[test]
    fn test_retain_rows() {
        let mut table = DataTable::new(["Year"]);
        for year in [2019, 2020, 2021] {
            table.push_row(vec![year.into()]).unwrap();
        }
        table.retain_rows(|row| row[0].as_integer() != Some(2020));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(CellValue::Text("HR".to_string()).to_string(), "HR");
        assert_eq!(CellValue::Integer(3).to_string(), "3");
        assert_eq!(CellValue::Float(2.5).to_string(), "2.50");
        assert_eq!(CellValue::Null.to_string(), "");
    }
}
