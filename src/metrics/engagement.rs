//! Engagement score summary.

use std::collections::BTreeMap;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::metrics::table::DataTable;

#[derive(Default)]
struct ScoreStats {
    total: f64,
    min: f64,
    max: f64,
    count: usize,
}

impl ScoreStats {
    fn add(&mut self, score: f64) {
        if self.count == 0 {
            self.min = score;
            self.max = score;
        } else {
            self.min = self.min.min(score);
            self.max = self.max.max(score);
        }
        self.total += score;
        self.count += 1;
    }
}

/// Engagement score summary by department: mean, min, max, and count of
/// scores, departments sorted by name.
///
/// Columns: `Department, Mean, Min, Max, Count`.
pub fn engagement_summary(dataset: &Dataset) -> Result<DataTable> {
    let mut by_department: BTreeMap<String, ScoreStats> = BTreeMap::new();
    for record in dataset.records() {
        by_department
            .entry(record.department.clone())
            .or_default()
            .add(record.engagement_score);
    }

    let mut table = DataTable::new(["Department", "Mean", "Min", "Max", "Count"]);
    for (department, stats) in by_department {
        table.push_row(vec![
            department.into(),
            (stats.total / stats.count as f64).into(),
            stats.min.into(),
            stats.max.into(),
            stats.count.into(),
        ])?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::{parse_date, EmployeeRecord};
    use crate::metrics::table::CellValue;

    fn record(department: &str, score: f64) -> EmployeeRecord {
        EmployeeRecord::new(
            department,
            "Male",
            60000.0,
            score,
            parse_date("2020-01-01").unwrap(),
            None,
            "Active",
        )
    }

    #[test]
    fn test_summary_stats() {
        let dataset = Dataset::new(vec![
            record("IT", 6.0),
            record("IT", 8.0),
            record("IT", 7.0),
            record("Sales", 9.0),
        ]);

        let table = engagement_summary(&dataset).unwrap();
        assert_eq!(table.len(), 2);

        assert_eq!(table.cell(0, "Department").and_then(CellValue::as_text), Some("IT"));
        assert_eq!(table.cell(0, "Mean").and_then(CellValue::as_float), Some(7.0));
        assert_eq!(table.cell(0, "Min").and_then(CellValue::as_float), Some(6.0));
        assert_eq!(table.cell(0, "Max").and_then(CellValue::as_float), Some(8.0));
        assert_eq!(table.cell(0, "Count").and_then(CellValue::as_integer), Some(3));

        assert_eq!(table.cell(1, "Department").and_then(CellValue::as_text), Some("Sales"));
        assert_eq!(table.cell(1, "Count").and_then(CellValue::as_integer), Some(1));
    }

    #[test]
    fn test_includes_terminated_employees() {
        // The summary covers all records, not only active ones.
        let terminated = EmployeeRecord::new(
            "HR",
            "Male",
            60000.0,
            5.5,
            parse_date("2018-01-01").unwrap(),
            Some(parse_date("2021-01-01").unwrap()),
            "Terminated",
        );
        let dataset = Dataset::new(vec![terminated]);

        let table = engagement_summary(&dataset).unwrap();
        assert_eq!(table.cell(0, "Count").and_then(CellValue::as_integer), Some(1));
    }

    #[test]
    fn test_empty_dataset() {
        assert!(engagement_summary(&Dataset::new(vec![])).unwrap().is_empty());
    }
}
