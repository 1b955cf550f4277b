//! Gender diversity by department.

use std::collections::BTreeMap;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::metrics::table::DataTable;

/// Record count per (department, gender) pair, sorted by department then
/// gender. Pairs with no records do not appear.
///
/// Columns: `Department, Gender, Count`.
pub fn gender_diversity(dataset: &Dataset) -> Result<DataTable> {
    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
    for record in dataset.records() {
        *counts
            .entry((record.department.clone(), record.gender.clone()))
            .or_default() += 1;
    }

    let mut table = DataTable::new(["Department", "Gender", "Count"]);
    for ((department, gender), count) in counts {
        table.push_row(vec![department.into(), gender.into(), count.into()])?;
    }

    Ok(table)
}
