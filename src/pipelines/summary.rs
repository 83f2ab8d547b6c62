//! Summary pipeline
//!
//! Reads the store back and reports, for each feature, the correlation between year and value
//! and the fitted trend at both ends of the covered period.
//! The report is written as a CSV file and printed as a table.
use std::path::PathBuf;

use log::{info, warn};
use serde::Serialize;

use crate::error::Error;
use crate::pipelines::pipeline::Pipeline;
use crate::stats;
use crate::store::Store;

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub feature: String,
    pub n: usize,
    pub r: Option<f64>,
    pub significance: Option<String>,
    pub first_year: i32,
    pub last_year: i32,
    pub fit_start: f64,
    pub fit_end: f64,
}

impl SummaryRow {
    /// Summarize a feature. Returns `None` for an empty series.
    pub fn new(feature: &str, years: &[i32], values: &[f64]) -> Option<Self> {
        let fit = stats::linear_fit(years, values);
        let (first_year, last_year) = (*years.first()?, *years.last()?);
        let (fit_start, fit_end) = (*fit.first()?, *fit.last()?);
        let correlation = stats::pearson(years, values);

        Some(Self {
            feature: feature.to_string(),
            n: years.len(),
            r: correlation.map(|c| c.r),
            significance: correlation.map(|c| c.significance().to_string()),
            first_year,
            last_year,
            fit_start,
            fit_end,
        })
    }
}

pub struct Summary {
    store: PathBuf,
    dst: PathBuf,
}

impl Summary {
    pub fn new(store: PathBuf, dst: PathBuf) -> Self {
        Self { store, dst }
    }

    fn print(rows: &[SummaryRow]) {
        println!(
            "{:<28} {:>8} {:>8} {:>12} {:>11} {:>11}",
            "feature", "n", "r", "significance", "fit start", "fit end"
        );
        for row in rows {
            let r = row.r.map(|r| format!("{:.3}", r)).unwrap_or_default();
            println!(
                "{:<28} {:>8} {:>8} {:>12} {:>11.4} {:>11.4}",
                row.feature,
                row.n,
                r,
                row.significance.as_deref().unwrap_or("-"),
                row.fit_start,
                row.fit_end
            );
        }
    }
}

impl Pipeline<Vec<SummaryRow>> for Summary {
    fn run(&self) -> Result<Vec<SummaryRow>, Error> {
        if !self.store.is_file() {
            return Err(Error::MissingInput(self.store.clone()));
        }
        let store = Store::load(&self.store)?;

        let mut rows = Vec::new();
        for feature in store.features() {
            let series = match store.series(feature) {
                Some(s) => s.sorted_by_year(),
                None => {
                    warn!("[{}] unaligned arrays, skipping", feature);
                    continue;
                }
            };
            match SummaryRow::new(feature, series.years(), series.values()) {
                Some(row) => rows.push(row),
                None => warn!("[{}] empty feature, skipping", feature),
            }
        }

        let mut out = csv::Writer::from_path(&self.dst)?;
        for row in &rows {
            out.serialize(row)?;
        }
        out.flush()?;
        info!("summary of {} features written to {:?}", rows.len(), self.dst);

        Self::print(&rows);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FeatureSeries;

    #[test]
    fn row() {
        let row = SummaryRow::new("TTR", &[1990, 1991, 1992], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(row.n, 3);
        assert_eq!((row.first_year, row.last_year), (1990, 1992));
        assert!((row.fit_start - 1.0).abs() < 1e-9);
        assert!((row.fit_end - 3.0).abs() < 1e-9);
        assert_eq!(row.significance.as_deref(), Some("p < 0.001"));
    }

    #[test]
    fn row_without_correlation() {
        let row = SummaryRow::new("VERB", &[2000], &[0.2]).unwrap();
        assert_eq!(row.r, None);
        assert_eq!(row.significance, None);
        assert_eq!(row.fit_start, 0.2);

        assert!(SummaryRow::new("VERB", &[], &[]).is_none());
    }

    #[test]
    fn run() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("store.json");
        let dst = dir.path().join("summary.csv");

        let mut store = Store::load(&store_path).unwrap();
        let series = FeatureSeries::new(vec![3.0, 1.0, 2.0], vec![2002, 2000, 2001]).unwrap();
        store.merge_key("word_length", &series);
        store.merge_key("empty", &FeatureSeries::default());
        store.flush().unwrap();

        let rows = Summary::new(store_path, dst.clone()).run().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].feature, "word_length");
        assert_eq!(rows[0].first_year, 2000);
        assert!((rows[0].r.unwrap() - 1.0).abs() < 1e-9);

        let mut reader = csv::Reader::from_path(&dst).unwrap();
        assert_eq!(reader.records().count(), 1);
    }

    #[test]
    fn missing_store() {
        let dir = tempfile::tempdir().unwrap();
        let summary = Summary::new(dir.path().join("nope.json"), dir.path().join("out.csv"));
        assert!(matches!(summary.run(), Err(Error::MissingInput(_))));
    }
}
