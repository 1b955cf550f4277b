//! Employee record structure and date parsing.
//!
//! An [`EmployeeRecord`] is one row of the loaded HR table. The columns of
//! the input file map to typed fields, and three derived fields (hire year,
//! termination year, active flag) are computed once at construction so that
//! every metric reads them without re-deriving.
//!
//! # Examples
//!
//! ```
//! use peoplelens::dataset::record::{parse_date, EmployeeRecord};
//!
//! let record = EmployeeRecord::new(
//!     "IT",
//!     "Female",
//!     85000.0,
//!     8.2,
//!     parse_date("2019-04-01").unwrap(),
//!     None,
//!     "Active",
//! );
//!
//! assert_eq!(record.year_hired, 2019);
//! assert!(record.active);
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PeopleLensError, Result};

/// Date formats accepted for `Hire_Date` and `Termination_Date`, tried in
/// order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];

/// The status value that marks a record as an active employee.
pub const ACTIVE_STATUS: &str = "Active";

/// A single row of the HR dataset.
///
/// Derived fields are filled in by [`EmployeeRecord::new`] and must not be
/// set independently: `year_terminated` is `Some` exactly when
/// `termination_date` is, and `active` holds exactly when `status` equals
/// [`ACTIVE_STATUS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Department name as it appears in the input file.
    pub department: String,
    /// Gender value as it appears in the input file.
    pub gender: String,
    /// Annual salary.
    pub salary: f64,
    /// Engagement survey score.
    pub engagement_score: f64,
    /// Date of hire.
    pub hire_date: NaiveDate,
    /// Date of termination, if the employee has left.
    pub termination_date: Option<NaiveDate>,
    /// Raw status value.
    pub status: String,
    /// Derived: calendar year of `hire_date`.
    pub year_hired: i32,
    /// Derived: calendar year of `termination_date`.
    pub year_terminated: Option<i32>,
    /// Derived: whether `status` equals [`ACTIVE_STATUS`].
    pub active: bool,
}

impl EmployeeRecord {
    /// Create a record and compute its derived fields.
    pub fn new<S: Into<String>>(
        department: S,
        gender: S,
        salary: f64,
        engagement_score: f64,
        hire_date: NaiveDate,
        termination_date: Option<NaiveDate>,
        status: S,
    ) -> Self {
        let status = status.into();
        let active = status == ACTIVE_STATUS;
        EmployeeRecord {
            department: department.into(),
            gender: gender.into(),
            salary,
            engagement_score,
            hire_date,
            termination_date,
            status,
            year_hired: hire_date.year(),
            year_terminated: termination_date.map(|d| d.year()),
            active,
        }
    }
}

/// Parse a calendar date in one of the accepted formats.
///
/// Formats are tried in a fixed order; the first that parses wins. An input
/// matching none of them is a parse error.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }
    Err(PeopleLensError::parse(format!(
        "unrecognized date `{value}` (expected one of: {})",
        DATE_FORMATS.join(", ")
    )))
}
