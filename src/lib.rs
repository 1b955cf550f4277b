//! # PeopleLens
//!
//! A conversational HR analytics engine for Rust.
//!
//! PeopleLens answers free-text questions about an HR dataset by classifying
//! the question into one of a closed set of metrics, computing the matching
//! aggregate over the loaded employee table, and returning a caption, a
//! result table, and a declarative chart specification for a presentation
//! layer to render.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Deterministic rule-based intent classification
//! - Seven built-in workforce metrics (headcount, attrition, salary, ...)
//! - Declarative chart specifications, no rendering dependency
//! - CSV dataset loading with strict row validation
//!
//! ## Example
//!
//! ```
//! use peoplelens::dataset::loader::read_dataset;
//! use peoplelens::engine::AnalyticsEngine;
//!
//! let csv = "\
//! Department,Gender,Salary,Engagement_Score,Hire_Date,Termination_Date,Status
//! IT,Male,72000,7.5,2020-02-10,,Active
//! Finance,Female,81000,8.1,2021-06-01,,Active
//! ";
//!
//! let dataset = read_dataset(csv.as_bytes()).unwrap();
//! let engine = AnalyticsEngine::new(dataset);
//!
//! let reply = engine.process("headcount trend").unwrap();
//! assert!(reply.table.is_some());
//! ```

pub mod chart;
pub mod cli;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod intent;
pub mod metrics;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
