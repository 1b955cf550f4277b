//! Declarative chart specifications.
//!
//! The engine never calls a rendering library. Instead it attaches a
//! [`ChartSpec`] to each reply: chart kind, axis columns, optional colour
//! grouping, and title. A presentation layer (terminal, web chat, notebook)
//! maps the spec onto whatever plotting facility it has. Keeping the spec
//! declarative is what decouples computation from rendering.
//!
//! # Examples
//!
//! ```
//! use peoplelens::chart::{ChartKind, ChartSpec};
//!
//! let spec = ChartSpec::new(ChartKind::Line, "Active Headcount Trend")
//!     .x("Year")
//!     .y("Active_Headcount")
//!     .markers(true)
//!     .value_labels(true);
//!
//! assert_eq!(spec.kind, ChartKind::Line);
//! assert_eq!(spec.x, "Year");
//! ```

use serde::{Deserialize, Serialize};

/// The kind of chart a result table should be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Line chart over an ordered axis
    Line,
    /// Plain bar chart
    Bar,
    /// Bar chart with one bar group per x value, split by `color_by`
    GroupedBar,
}

/// A renderer-independent chart description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart kind.
    pub kind: ChartKind,
    /// Chart title.
    pub title: String,
    /// Result table column used for the x axis.
    pub x: String,
    /// Result table column used for the y axis.
    pub y: String,
    /// Result table column used to colour-group series, if any.
    pub color_by: Option<String>,
    /// Whether to draw point markers (line charts).
    pub markers: bool,
    /// Whether to draw the value next to each point or bar.
    pub value_labels: bool,
}

impl ChartSpec {
    /// Create a spec with the given kind and title; axes start empty.
    pub fn new<S: Into<String>>(kind: ChartKind, title: S) -> Self {
        ChartSpec {
            kind,
            title: title.into(),
            x: String::new(),
            y: String::new(),
            color_by: None,
            markers: false,
            value_labels: false,
        }
    }

    /// Set the x axis column.
    pub fn x<S: Into<String>>(mut self, column: S) -> Self {
        self.x = column.into();
        self
    }

    /// Set the y axis column.
    pub fn y<S: Into<String>>(mut self, column: S) -> Self {
        self.y = column.into();
        self
    }

    /// Set the colour grouping column.
    pub fn color_by<S: Into<String>>(mut self, column: S) -> Self {
        self.color_by = Some(column.into());
        self
    }

    /// Enable or disable point markers.
    pub fn markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    /// Enable or disable value labels.
    pub fn value_labels(mut self, value_labels: bool) -> Self {
        self.value_labels = value_labels;
        self
    }
}
