//! Employee dataset loading and access.

pub mod dataset;
pub mod loader;
pub mod record;

pub use dataset::Dataset;
pub use loader::{load_dataset, read_dataset};
pub use record::EmployeeRecord;
