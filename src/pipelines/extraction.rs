//! Feature extraction pipeline
//!
//! # Processing
//! 1. Speeches are loaded from the source folder.
//! 1. Speeches are sampled once (at most `cap` per year, seeded).
//! 1. Sampled speeches are lemmatized (if needed) and annotated concurrently if an annotator is available.
//!    Without one, features that need annotations are skipped.
//! 1. Every feature is computed concurrently on the sample.
//! 1. Features are merged one by one into the store.
use std::path::{Path, PathBuf};

use log::{info, warn};
use rayon::prelude::*;

use crate::annotation::Annotator;
use crate::error::Error;
use crate::ingest;
use crate::metrics::{self, FeatureSeries, Metric, Ttr};
use crate::pipelines::pipeline::Pipeline;
use crate::sampling::Sampler;
use crate::speech::Speech;
use crate::store::Store;

/// Runs a set of features on a sample of speeches and saves them into a store.
pub struct Extractor {
    sampler: Sampler,
    metrics: Vec<Box<dyn Metric>>,
}

impl Extractor {
    pub fn new(sampler: Sampler, metrics: Vec<Box<dyn Metric>>) -> Self {
        Self { sampler, metrics }
    }

    pub fn metrics(&self) -> &[Box<dyn Metric>] {
        &self.metrics
    }

    /// Drop the features that need annotated speeches.
    pub fn without_annotation(mut self) -> Self {
        self.metrics.retain(|m| {
            if m.needs_annotation() {
                warn!("[{}] skipped: no annotator", m.name());
                false
            } else {
                true
            }
        });
        self
    }

    /// Compute every feature on the same sample.
    ///
    /// Sampling an already sampled collection with the same sampler keeps all of it.
    /// Results are in feature order.
    pub fn extract(&self, speeches: &[Speech]) -> Vec<(String, FeatureSeries)> {
        let sample = self.sampler.sample(speeches);
        info!(
            "extracting {} features from {} speeches",
            self.metrics.len(),
            sample.len()
        );

        self.metrics
            .par_iter()
            .map(|m| (m.name(), m.extract(&sample)))
            .collect()
    }

    /// Compute every feature and merge each of them into the store at `store`.
    ///
    /// Merges are sequential. A failed merge is logged and only loses its own feature.
    /// Returns the names of the saved features.
    pub fn run(&self, speeches: &[Speech], store: &Path) -> Vec<String> {
        self.extract(speeches)
            .into_iter()
            .filter_map(|(name, series)| Store::merge(store, &name, &series).then_some(name))
            .collect()
    }
}

pub struct Extraction {
    src: PathBuf,
    store: PathBuf,
    sampler: Sampler,
    ttr: Ttr,
    annotator: Option<Annotator>,
}

impl Extraction {
    pub fn new(
        src: PathBuf,
        store: PathBuf,
        sampler: Sampler,
        ttr: Ttr,
        annotator: Option<Annotator>,
    ) -> Self {
        if annotator.is_none() {
            warn!("No annotator specified! Syntactic and part-of-speech features will be skipped.");
        }
        Self {
            src,
            store,
            sampler,
            ttr,
            annotator,
        }
    }
}

impl Pipeline<Vec<String>> for Extraction {
    fn run(&self) -> Result<Vec<String>, Error> {
        let speeches = ingest::load_dir(&self.src, None)?;
        let mut speeches = self.sampler.select(speeches);

        let extractor = Extractor::new(self.sampler, metrics::all(self.ttr.clone()));
        let extractor = match &self.annotator {
            Some(annotator) => {
                ingest::lemmatize_missing(&mut speeches, annotator);
                annotator.annotate_speeches(&mut speeches);
                extractor
            }
            None => extractor.without_annotation(),
        };

        let saved = extractor.run(&speeches, &self.store);
        info!("{} features saved into {:?}", saved.len(), self.store);
        Ok(saved)
    }
}
