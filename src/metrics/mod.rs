//! Workforce metric computations.
//!
//! Each metric is a pure function from a [`Dataset`](crate::dataset::Dataset)
//! to a small [`DataTable`]: no side effects, deterministic for the same
//! input, grouped output sorted by grouping key. Metrics never mutate the
//! dataset they are given; department filtering happens upstream in the
//! orchestrator.

pub mod attrition;
pub mod diversity;
pub mod engagement;
pub mod headcount;
pub mod salary;
pub mod table;

pub use table::{CellValue, DataTable};
