//! Pipelines.
//!
//! Each command of the binary is a pipeline, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
mod extraction;
mod outliers;
#[allow(clippy::module_inception)]
pub mod pipeline;
mod summary;

pub use extraction::{Extraction, Extractor};
pub use outliers::Outliers;
pub use pipeline::Pipeline;
pub use summary::{Summary, SummaryRow};
