//! Outlier export pipeline
//!
//! Loads speeches, measures a single per-speech feature and exports the speeches above a threshold.
use std::path::PathBuf;

use log::info;

use crate::annotation::Annotator;
use crate::error::Error;
use crate::ingest;
use crate::metrics;
use crate::outliers;
use crate::pipelines::pipeline::Pipeline;

pub struct Outliers {
    src: PathBuf,
    feature: String,
    threshold: f64,
    dst: PathBuf,
    annotator: Option<Annotator>,
}

impl Outliers {
    pub fn new(
        src: PathBuf,
        feature: String,
        threshold: f64,
        dst: PathBuf,
        annotator: Option<Annotator>,
    ) -> Self {
        Self {
            src,
            feature,
            threshold,
            dst,
            annotator,
        }
    }
}

impl Pipeline<usize> for Outliers {
    /// Returns the number of exported speeches.
    fn run(&self) -> Result<usize, Error> {
        let metric = metrics::speech_metric(&self.feature).ok_or_else(|| {
            let known: Vec<String> = metrics::speech_metrics().iter().map(|m| m.name()).collect();
            Error::Custom(format!(
                "unknown feature {:?} (expected one of {:?})",
                self.feature, known
            ))
        })?;

        if metric.needs_annotation() && self.annotator.is_none() {
            return Err(Error::Custom(format!(
                "feature {:?} needs an annotator",
                self.feature
            )));
        }

        let mut speeches = ingest::load_dir(&self.src, self.annotator.as_ref())?;
        if let (true, Some(annotator)) = (metric.needs_annotation(), &self.annotator) {
            annotator.annotate_speeches(&mut speeches);
        }

        info!("[{}] looking for values above {}", self.feature, self.threshold);
        outliers::export(&speeches, metric.as_ref(), self.threshold, &self.dst)
    }
}
