//! Filter extraction from query text.
//!
//! Filters narrow the dataset before aggregation. Extraction always runs,
//! whether or not an intent was recognized: a department name is matched
//! against a fixed closed set, and every standalone four-digit token
//! starting with "20" is collected as a candidate year.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Departments recognized by the filter extractor, in canonical form.
pub const DEPARTMENTS: [&str; 7] = [
    "IT",
    "Finance",
    "HR",
    "Marketing",
    "Operations",
    "Sales",
    "R&D",
];

lazy_static! {
    // Word-bounded so that, for example, the "it" inside "attrition" is not
    // taken as the IT department.
    static ref DEPARTMENT_RE: Regex =
        Regex::new(r"\b(it|finance|hr|marketing|operations|sales|r&d)\b").unwrap();
    static ref YEAR_RE: Regex = Regex::new(r"\b(20\d{2})\b").unwrap();
}

/// Filters extracted from a single query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Department in canonical capitalization, if one was mentioned.
    pub department: Option<String>,
    /// All year tokens found, in order of appearance.
    pub years: Vec<i32>,
}

impl FilterSet {
    /// Check whether no filter was extracted.
    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.years.is_empty()
    }
}

/// Extract filters from raw query text.
///
/// Matching is case-insensitive; the first department mentioned wins and is
/// returned in canonical capitalization.
pub fn extract_filters(query: &str) -> FilterSet {
    let normalized = query.trim().to_lowercase();

    let department = DEPARTMENT_RE
        .find(&normalized)
        .map(|m| canonical_department(m.as_str()));

    let years = YEAR_RE
        .find_iter(&normalized)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    FilterSet { department, years }
}

fn canonical_department(matched: &str) -> String {
    DEPARTMENTS
        .iter()
        .find(|d| d.eq_ignore_ascii_case(matched))
        .map(|d| d.to_string())
        // The regex alternation only produces members of the closed set.
        .unwrap_or_else(|| matched.to_uppercase())
}
