//! CSV dataset loading.
//!
//! The loader reads a delimited text file with a header row into a
//! [`Dataset`]. Loading is all-or-nothing: a missing column or a row with an
//! unparsable date or number aborts the load with an error naming the row
//! and column. Silently dropping or coercing bad rows would corrupt every
//! downstream aggregate without detection, so no partially-loaded dataset is
//! ever returned.
//!
//! # Examples
//!
//! ```
//! use peoplelens::dataset::loader::read_dataset;
//!
//! let csv = "\
//! Department,Gender,Salary,Engagement_Score,Hire_Date,Termination_Date,Status
//! Sales,Male,55000,6.4,2021-09-01,,Active
//! Sales,Female,58000,7.8,2019-02-11,2023-05-30,Terminated
//! ";
//!
//! let dataset = read_dataset(csv.as_bytes()).unwrap();
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.active_count(), 1);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::info;

use crate::dataset::dataset::Dataset;
use crate::dataset::record::{parse_date, EmployeeRecord};
use crate::error::{PeopleLensError, Result};

/// Columns the input file must provide. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 7] = [
    "Department",
    "Gender",
    "Salary",
    "Engagement_Score",
    "Hire_Date",
    "Termination_Date",
    "Status",
];

/// Positions of the required columns within the header row.
struct ColumnIndices {
    department: usize,
    gender: usize,
    salary: usize,
    engagement_score: usize,
    hire_date: usize,
    termination_date: usize,
    status: usize,
}

impl ColumnIndices {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| PeopleLensError::dataset(format!("missing column `{name}`")))
        };

        Ok(ColumnIndices {
            department: position(REQUIRED_COLUMNS[0])?,
            gender: position(REQUIRED_COLUMNS[1])?,
            salary: position(REQUIRED_COLUMNS[2])?,
            engagement_score: position(REQUIRED_COLUMNS[3])?,
            hire_date: position(REQUIRED_COLUMNS[4])?,
            termination_date: position(REQUIRED_COLUMNS[5])?,
            status: position(REQUIRED_COLUMNS[6])?,
        })
    }
}

/// Load the HR dataset from a CSV file on disk.
///
/// This is expected to run once per process; the returned dataset is
/// read-only for the rest of execution.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PeopleLensError::dataset(format!("cannot open `{}`: {e}", path.display()))
    })?;
    let dataset = read_dataset(file)?;
    info!(
        "loaded {} employee records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Read the HR dataset from any CSV reader.
///
/// Rows are kept in input order; no filtering or deduplication happens here.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let columns = ColumnIndices::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        // Header occupies line 1, so data rows start at line 2.
        let line = index + 2;
        let row = row?;
        records.push(parse_row(&row, &columns, line)?);
    }

    Ok(Dataset::new(records))
}

fn field<'a>(row: &'a StringRecord, index: usize, name: &str, line: usize) -> Result<&'a str> {
    row.get(index).ok_or_else(|| {
        PeopleLensError::dataset(format!("row {line}: missing value for `{name}`"))
    })
}

fn parse_row(row: &StringRecord, columns: &ColumnIndices, line: usize) -> Result<EmployeeRecord> {
    let salary = field(row, columns.salary, "Salary", line)?;
    let salary: f64 = salary.trim().parse().map_err(|_| {
        PeopleLensError::parse(format!("row {line}, column `Salary`: invalid number `{salary}`"))
    })?;

    let engagement = field(row, columns.engagement_score, "Engagement_Score", line)?;
    let engagement_score: f64 = engagement.trim().parse().map_err(|_| {
        PeopleLensError::parse(format!(
            "row {line}, column `Engagement_Score`: invalid number `{engagement}`"
        ))
    })?;

    let hire_date = field(row, columns.hire_date, "Hire_Date", line)?;
    let hire_date = parse_date(hire_date.trim()).map_err(|e| {
        PeopleLensError::parse(format!("row {line}, column `Hire_Date`: {e}"))
    })?;

    let termination = field(row, columns.termination_date, "Termination_Date", line)?.trim();
    let termination_date = if termination.is_empty() {
        None
    } else {
        Some(parse_date(termination).map_err(|e| {
            PeopleLensError::parse(format!("row {line}, column `Termination_Date`: {e}"))
        })?)
    };

    Ok(EmployeeRecord::new(
        field(row, columns.department, "Department", line)?.trim(),
        field(row, columns.gender, "Gender", line)?.trim(),
        salary,
        engagement_score,
        hire_date,
        termination_date,
        field(row, columns.status, "Status", line)?.trim(),
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const HEADER: &str =
        "Department,Gender,Salary,Engagement_Score,Hire_Date,Termination_Date,Status";

    #[test]
    fn test_read_dataset_with_derived_fields() {
        let csv = format!(
            "{HEADER}\nIT,Male,70000,7.2,2019-03-01,,Active\nHR,Female,52000,8.0,2017-11-20,2021-06-30,Terminated\n"
        );
        let dataset = read_dataset(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        let records = dataset.records();
        assert_eq!(records[0].year_hired, 2019);
        assert_eq!(records[0].year_terminated, None);
        assert!(records[0].active);
        assert_eq!(records[1].year_terminated, Some(2021));
        assert!(!records[1].active);
    }

    #[test]
    fn test_row_order_preserved() {
        let csv = format!(
            "{HEADER}\nSales,Male,1,1,2020-01-01,,Active\nIT,Male,2,2,2018-01-01,,Active\nSales,Female,3,3,2019-01-01,,Active\n"
        );
        let dataset = read_dataset(csv.as_bytes()).unwrap();
        let departments: Vec<&str> =
            dataset.records().iter().map(|r| r.department.as_str()).collect();
        assert_eq!(departments, vec!["Sales", "IT", "Sales"]);
    }

    #[test]
    fn test_missing_column_fails() {
        let csv = "Department,Gender,Salary,Hire_Date,Termination_Date,Status\n";
        let err = read_dataset(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Engagement_Score"));
    }

    #[test]
    fn test_bad_date_fails_whole_load() {
        let csv = format!(
            "{HEADER}\nIT,Male,70000,7.2,2019-03-01,,Active\nIT,Male,70000,7.2,not-a-date,,Active\n"
        );
        let err = read_dataset(csv.as_bytes()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 3"), "unexpected message: {msg}");
        assert!(msg.contains("Hire_Date"), "unexpected message: {msg}");
    }

    #[test]
    fn test_bad_salary_fails_whole_load() {
        let csv = format!("{HEADER}\nIT,Male,lots,7.2,2019-03-01,,Active\n");
        let err = read_dataset(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Salary"));
    }

    #[test]
    fn test_load_dataset_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "Marketing,Female,61000,6.8,2022-08-15,,Active").unwrap();
        file.flush().unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].department, "Marketing");
    }

    #[test]
    fn test_load_dataset_missing_file() {
        assert!(load_dataset("/no/such/file.csv").is_err());
    }
}
