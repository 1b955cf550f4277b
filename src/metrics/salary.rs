//! Average salary trend.

use std::collections::BTreeMap;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::metrics::table::DataTable;

/// Mean salary grouped by hire year, sorted ascending.
///
/// Columns: `Year, Avg_Salary`. Years without hires do not appear.
pub fn avg_salary_trend(dataset: &Dataset) -> Result<DataTable> {
    let mut by_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for record in dataset.records() {
        let entry = by_year.entry(record.year_hired).or_default();
        entry.0 += record.salary;
        entry.1 += 1;
    }

    let mut table = DataTable::new(["Year", "Avg_Salary"]);
    for (year, (total, count)) in by_year {
        table.push_row(vec![year.into(), (total / count as f64).into()])?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::{parse_date, EmployeeRecord};
    use crate::metrics::table::CellValue;

    fn record(hired: &str, salary: f64) -> EmployeeRecord {
        EmployeeRecord::new(
            "Finance",
            "Female",
            salary,
            7.0,
            parse_date(hired).unwrap(),
            None,
            "Active",
        )
    }

    #[test]
    fn test_mean_per_hire_year() {
        let dataset = Dataset::new(vec![
            record("2020-01-01", 50000.0),
            record("2020-07-01", 70000.0),
            record("2022-02-01", 90000.0),
        ]);

        let table = avg_salary_trend(&dataset).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, "Year").and_then(CellValue::as_integer), Some(2020));
        assert_eq!(table.cell(0, "Avg_Salary").and_then(CellValue::as_float), Some(60000.0));
        assert_eq!(table.cell(1, "Avg_Salary").and_then(CellValue::as_float), Some(90000.0));
    }

    #[test]
    fn test_gap_years_absent() {
        let dataset = Dataset::new(vec![record("2018-01-01", 40000.0), record("2021-01-01", 45000.0)]);
        let table = avg_salary_trend(&dataset).unwrap();
        let years: Vec<i64> =
            table.column_values("Year").iter().filter_map(|c| c.as_integer()).collect();
        assert_eq!(years, vec![2018, 2021]);
    }

    #[test]
    fn test_empty_dataset() {
        assert!(avg_salary_trend(&Dataset::new(vec![])).unwrap().is_empty());
    }
}
