//! Headcount metrics.
//!
//! Three views over the same population: the per-year active headcount
//! trend, and the current active headcount split by gender or by
//! department.
//!
//! "Active as of end of year Y" means hired in year Y or earlier and either
//! never terminated or terminated in a year strictly after Y. The split
//! views instead use the status flag, counting only currently active
//! records.

use std::collections::BTreeMap;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::metrics::table::DataTable;

/// Active headcount per calendar year.
///
/// The year axis runs from the earliest to the latest hire year inclusive,
/// with one row per year even when the headcount did not change. An empty
/// dataset produces an empty table.
pub fn headcount_trend(dataset: &Dataset) -> Result<DataTable> {
    let mut table = DataTable::new(["Year", "Active_Headcount"]);
    let Some((first, last)) = dataset.hire_year_range() else {
        return Ok(table);
    };

    for year in first..=last {
        let active = dataset
            .records()
            .iter()
            .filter(|r| r.year_hired <= year && r.year_terminated.is_none_or(|y| y > year))
            .count();
        table.push_row(vec![year.into(), active.into()])?;
    }

    Ok(table)
}

/// Current active headcount by gender.
pub fn headcount_by_gender(dataset: &Dataset) -> Result<DataTable> {
    grouped_active_count(dataset, "Gender", |r| r.gender.clone())
}

/// Current active headcount by department.
pub fn headcount_by_department(dataset: &Dataset) -> Result<DataTable> {
    grouped_active_count(dataset, "Department", |r| r.department.clone())
}

fn grouped_active_count<F>(dataset: &Dataset, column: &str, key: F) -> Result<DataTable>
where
    F: Fn(&crate::dataset::EmployeeRecord) -> String,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in dataset.records().iter().filter(|r| r.active) {
        *counts.entry(key(record)).or_default() += 1;
    }

    let mut table = DataTable::new([column, "Headcount"]);
    for (group, count) in counts {
        table.push_row(vec![group.into(), count.into()])?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::{parse_date, EmployeeRecord};
    use crate::metrics::table::CellValue;

    fn record(
        department: &str,
        gender: &str,
        hired: &str,
        terminated: Option<&str>,
        status: &str,
    ) -> EmployeeRecord {
        EmployeeRecord::new(
            department,
            gender,
            60000.0,
            7.0,
            parse_date(hired).unwrap(),
            terminated.map(|t| parse_date(t).unwrap()),
            status,
        )
    }

    fn fixture() -> Dataset {
        Dataset::new(vec![
            record("IT", "Male", "2019-01-10", None, "Active"),
            record("IT", "Female", "2019-06-01", Some("2021-03-31"), "Terminated"),
            record("Sales", "Female", "2020-02-15", None, "Active"),
            record("HR", "Male", "2022-08-01", None, "Active"),
        ])
    }

    #[test]
    fn test_trend_covers_every_year() {
        let table = headcount_trend(&fixture()).unwrap();
        let years: Vec<i64> =
            table.column_values("Year").iter().filter_map(|c| c.as_integer()).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2022]);
    }

    #[test]
    fn test_trend_counts_active_as_of_year_end() {
        let table = headcount_trend(&fixture()).unwrap();
        let counts: Vec<i64> = table
            .column_values("Active_Headcount")
            .iter()
            .filter_map(|c| c.as_integer())
            .collect();
        // 2019: both IT hires. 2020: plus the Sales hire. 2021: the IT
        // termination lands, back to 2. 2022: the HR hire brings it to 3.
        assert_eq!(counts, vec![2, 3, 2, 3]);
    }

    #[test]
    fn test_trend_single_hire_year() {
        let dataset = Dataset::new(vec![record("IT", "Male", "2020-05-05", None, "Active")]);
        let table = headcount_trend(&dataset).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, "Year").and_then(CellValue::as_integer), Some(2020));
    }

    #[test]
    fn test_trend_empty_dataset() {
        let table = headcount_trend(&Dataset::new(vec![])).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns(), ["Year", "Active_Headcount"]);
    }

    #[test]
    fn test_by_gender_counts_active_only() {
        let table = headcount_by_gender(&fixture()).unwrap();
        // The terminated IT record is excluded, leaving 1 female, 2 male.
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, "Gender").and_then(CellValue::as_text), Some("Female"));
        assert_eq!(table.cell(0, "Headcount").and_then(CellValue::as_integer), Some(1));
        assert_eq!(table.cell(1, "Gender").and_then(CellValue::as_text), Some("Male"));
        assert_eq!(table.cell(1, "Headcount").and_then(CellValue::as_integer), Some(2));
    }

    #[test]
    fn test_by_department_sorted_by_name() {
        let table = headcount_by_department(&fixture()).unwrap();
        let departments: Vec<&str> =
            table.column_values("Department").iter().filter_map(|c| c.as_text()).collect();
        assert_eq!(departments, vec!["HR", "IT", "Sales"]);
    }
}
