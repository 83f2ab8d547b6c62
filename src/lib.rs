/*! # Plenum

Diachronic linguistic features of parliamentary speeches.

Speeches are loaded from CSV files, optionally annotated by an external NLP engine,
sampled per year and reduced to (value, year) series that are persisted in a single store.
The store can then be summarized (correlation with time, linear trend).

The crate can be used through its binary or as a library: see [pipelines].
!*/
pub mod annotation;
pub mod error;
pub mod ingest;
pub mod metrics;
pub mod outliers;
pub mod pipelines;
pub mod sampling;
pub mod speech;
pub mod stats;
pub mod store;
