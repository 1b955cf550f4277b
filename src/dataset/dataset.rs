//! In-memory employee table.

use serde::{Deserialize, Serialize};

use crate::dataset::record::EmployeeRecord;

/// An immutable collection of employee records in input order.
///
/// The dataset is loaded once per process and treated as read-only for the
/// rest of execution. Filtering produces an independent copy, never a view
/// into shared mutable state, so query handling can never corrupt the loaded
/// table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<EmployeeRecord>,
}

impl Dataset {
    /// Create a dataset from parsed records, preserving their order.
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Dataset { records }
    }

    /// Get the records as a slice.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count the records whose status marks them as active.
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.active).count()
    }

    /// Return a new dataset containing only records from the given
    /// department, matched case-insensitively.
    pub fn filter_department(&self, department: &str) -> Dataset {
        let needle = department.to_lowercase();
        let records = self
            .records
            .iter()
            .filter(|r| r.department.to_lowercase() == needle)
            .cloned()
            .collect();
        Dataset { records }
    }

    /// Sorted distinct department names.
    pub fn departments(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.iter().map(|r| r.department.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Minimum and maximum hire year across all records, if any.
    pub fn hire_year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year_hired).min()?;
        let max = self.records.iter().map(|r| r.year_hired).max()?;
        Some((min, max))
    }
}
