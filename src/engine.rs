//! Query orchestration.
//!
//! [`AnalyticsEngine`] owns the loaded dataset and turns one free-text query
//! into one [`Reply`]: classify, narrow the dataset by the extracted
//! department, dispatch to the matching metric, and attach the caption and
//! chart spec. Processing is synchronous and stateless across queries; the
//! same query against the same dataset always produces an identical reply.
//!
//! The dataset is injected at construction rather than read from ambient
//! global state, so tests can substitute any fixture table.
//!
//! # Examples
//!
//! ```
//! use peoplelens::dataset::loader::read_dataset;
//! use peoplelens::engine::AnalyticsEngine;
//! use peoplelens::intent::Intent;
//!
//! let csv = "\
//! Department,Gender,Salary,Engagement_Score,Hire_Date,Termination_Date,Status
//! IT,Male,72000,7.5,2020-02-10,,Active
//! ";
//! let engine = AnalyticsEngine::new(read_dataset(csv.as_bytes()).unwrap());
//!
//! let reply = engine.process("gender ratio").unwrap();
//! assert_eq!(reply.intent, Some(Intent::HeadcountByGender));
//! assert!(reply.table.is_some());
//! assert!(reply.chart.is_some());
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::chart::{ChartKind, ChartSpec};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::intent::{classify, Intent};
use crate::metrics::table::DataTable;
use crate::metrics::{attrition, diversity, engagement, headcount, salary};

/// Caption returned for queries no rule recognizes.
pub const UNRECOGNIZED_CAPTION: &str =
    "Sorry, I couldn't understand that query yet. Try asking about headcount, salary, or attrition.";

/// The engine's answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// The classified metric, or `None` for unrecognized queries.
    pub intent: Option<Intent>,
    /// Short text summary for the user.
    pub caption: String,
    /// The computed result table; present iff the query was recognized.
    pub table: Option<DataTable>,
    /// Chart specification; present iff the query was recognized.
    pub chart: Option<ChartSpec>,
}

impl Reply {
    /// Check whether the query resolved to a metric.
    pub fn is_recognized(&self) -> bool {
        self.intent.is_some()
    }

    fn unrecognized() -> Self {
        Reply {
            intent: None,
            caption: UNRECOGNIZED_CAPTION.to_string(),
            table: None,
            chart: None,
        }
    }
}

/// The query orchestrator.
///
/// Holds the dataset read-only; every query aggregates over an independent
/// filtered copy, so the loaded table is never mutated.
pub struct AnalyticsEngine {
    dataset: Dataset,
}

impl AnalyticsEngine {
    /// Create an engine over a loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        AnalyticsEngine { dataset }
    }

    /// Get the underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Answer one free-text query.
    ///
    /// Unrecognized queries are a normal outcome: the reply carries the
    /// fixed fallback caption with no table and no chart.
    pub fn process(&self, query: &str) -> Result<Reply> {
        let classification = classify(query);

        let Some(intent) = classification.intent else {
            warn!("unrecognized query: {query:?}");
            return Ok(Reply::unrecognized());
        };
        debug!("query {query:?} classified as {intent} with {:?}", classification.filters);

        let scope = match &classification.filters.department {
            Some(department) => self.dataset.filter_department(department),
            None => self.dataset.clone(),
        };

        let mut table = compute_metric(intent, &scope)?;

        // Year filters narrow the output rows, not the input records:
        // filtering records by year would corrupt the cumulative headcount
        // and union-year attrition semantics.
        if !classification.filters.years.is_empty() {
            if let Some(year_index) = table.column_index("Year") {
                let years = &classification.filters.years;
                table.retain_rows(|row| {
                    row[year_index]
                        .as_integer()
                        .is_some_and(|y| years.contains(&(y as i32)))
                });
            }
        }

        Ok(Reply {
            intent: Some(intent),
            caption: caption_for(intent).to_string(),
            table: Some(table),
            chart: Some(chart_for(intent)),
        })
    }
}

fn compute_metric(intent: Intent, scope: &Dataset) -> Result<DataTable> {
    match intent {
        Intent::Headcount => headcount::headcount_trend(scope),
        Intent::HeadcountByGender => headcount::headcount_by_gender(scope),
        Intent::HeadcountByDepartment => headcount::headcount_by_department(scope),
        Intent::Attrition => attrition::attrition_rate(scope),
        Intent::Salary => salary::avg_salary_trend(scope),
        Intent::Engagement => engagement::engagement_summary(scope),
        Intent::Diversity => diversity::gender_diversity(scope),
    }
}

fn caption_for(intent: Intent) -> &'static str {
    match intent {
        Intent::Headcount => "Here's the headcount trend over the years.",
        Intent::HeadcountByGender => "Here's the active headcount split by gender.",
        Intent::HeadcountByDepartment => "Here's the current headcount across departments.",
        Intent::Attrition => "Here's the attrition trend by year.",
        Intent::Salary => "Here's the salary trend you requested.",
        Intent::Engagement => "Here's how engagement scores look by department.",
        Intent::Diversity => "Here's the gender diversity overview.",
    }
}

fn chart_for(intent: Intent) -> ChartSpec {
    match intent {
        Intent::Headcount => ChartSpec::new(ChartKind::Line, "Active Headcount Trend")
            .x("Year")
            .y("Active_Headcount")
            .markers(true)
            .value_labels(true),
        Intent::HeadcountByGender => ChartSpec::new(ChartKind::Bar, "Headcount by Gender")
            .x("Gender")
            .y("Headcount")
            .value_labels(true),
        Intent::HeadcountByDepartment => ChartSpec::new(ChartKind::Bar, "Headcount by Department")
            .x("Department")
            .y("Headcount")
            .value_labels(true),
        Intent::Attrition => ChartSpec::new(ChartKind::Bar, "Attrition Rate by Year")
            .x("Year")
            .y("Attrition_Rate(%)")
            .value_labels(true),
        Intent::Salary => ChartSpec::new(ChartKind::Line, "Average Salary Trend")
            .x("Year")
            .y("Avg_Salary")
            .markers(true)
            .value_labels(true),
        Intent::Engagement => ChartSpec::new(ChartKind::Bar, "Engagement Score by Department")
            .x("Department")
            .y("Mean")
            .value_labels(true),
        Intent::Diversity => ChartSpec::new(ChartKind::GroupedBar, "Gender Diversity by Department")
            .x("Department")
            .y("Count")
            .color_by("Gender")
            .value_labels(true),
    }
}
