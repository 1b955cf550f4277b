//! Query intent classification.
//!
//! This module turns free-text questions into a named metric plus optional
//! filters. Classification is rule-based and deterministic: an ordered
//! phrase bank is scanned first, then a fixed-priority keyword fallback.
//! There is no scoring and no learned model.

pub mod classifier;
pub mod filters;

use serde::{Deserialize, Serialize};

pub use classifier::classify;
pub use filters::FilterSet;

/// The closed set of metrics a query can resolve to.
///
/// Serialized forms match the recognized metric vocabulary exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Active headcount trend per year.
    Headcount,
    /// Active headcount split by gender.
    #[serde(rename = "headcount_gender")]
    HeadcountByGender,
    /// Active headcount split by department.
    #[serde(rename = "headcount_department")]
    HeadcountByDepartment,
    /// Yearly attrition rate.
    Attrition,
    /// Average salary trend by hire year.
    Salary,
    /// Engagement score summary by department.
    Engagement,
    /// Gender diversity by department.
    Diversity,
}

impl Intent {
    /// All intents, in display order.
    pub const ALL: [Intent; 7] = [
        Intent::Headcount,
        Intent::HeadcountByGender,
        Intent::HeadcountByDepartment,
        Intent::Attrition,
        Intent::Salary,
        Intent::Engagement,
        Intent::Diversity,
    ];

    /// The metric name in the recognized vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Headcount => "headcount",
            Intent::HeadcountByGender => "headcount_gender",
            Intent::HeadcountByDepartment => "headcount_department",
            Intent::Attrition => "attrition",
            Intent::Salary => "salary",
            Intent::Engagement => "engagement",
            Intent::Diversity => "diversity",
        }
    }

    /// A one-line description of the metric, for catalogue listings.
    pub fn description(&self) -> &'static str {
        match self {
            Intent::Headcount => "Active headcount trend per year",
            Intent::HeadcountByGender => "Active headcount by gender",
            Intent::HeadcountByDepartment => "Active headcount by department",
            Intent::Attrition => "Yearly attrition rate",
            Intent::Salary => "Average salary trend",
            Intent::Engagement => "Engagement score summary by department",
            Intent::Diversity => "Gender diversity by department",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The product of classifying one query.
///
/// An unrecognized query is represented by `intent == None` with whatever
/// filters were still extractable; it is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The classified metric, if any phrase or keyword matched.
    pub intent: Option<Intent>,
    /// Filters extracted from the query text, independent of the intent.
    pub filters: FilterSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_names_match_vocabulary() {
        let names: Vec<&str> = Intent::ALL.iter().map(|i| i.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "headcount",
                "headcount_gender",
                "headcount_department",
                "attrition",
                "salary",
                "engagement",
                "diversity",
            ]
        );
    }

    #[test]
    fn test_intent_serializes_as_metric_name() {
        let json = serde_json::to_string(&Intent::HeadcountByGender).unwrap();
        assert_eq!(json, "\"headcount_gender\"");
    }
}
