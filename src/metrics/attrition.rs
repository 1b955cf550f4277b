//! Yearly attrition rate.

use std::collections::BTreeMap;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::metrics::table::DataTable;

/// Added to the hire count before dividing. A year with attritions but no
/// hires then produces a large finite rate instead of a division by zero,
/// and a year with neither produces 0. This is a deliberate approximation,
/// not a bug.
const HIRES_EPSILON: f64 = 1e-5;

/// Attrition rate per year.
///
/// The year axis is the union of hire years and termination years, sorted
/// ascending. A year present on only one side keeps the other side's count
/// at 0, so years with hires and no terminations still appear.
///
/// Columns: `Year, Hires, Attritions, Attrition_Rate(%)`.
pub fn attrition_rate(dataset: &Dataset) -> Result<DataTable> {
    let mut by_year: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for record in dataset.records() {
        by_year.entry(record.year_hired).or_default().0 += 1;
        if let Some(year) = record.year_terminated {
            by_year.entry(year).or_default().1 += 1;
        }
    }

    let mut table = DataTable::new(["Year", "Hires", "Attritions", "Attrition_Rate(%)"]);
    for (year, (hires, attritions)) in by_year {
        let rate = attritions as f64 / (hires as f64 + HIRES_EPSILON) * 100.0;
        table.push_row(vec![year.into(), hires.into(), attritions.into(), rate.into()])?;
    }

    Ok(table)
}
