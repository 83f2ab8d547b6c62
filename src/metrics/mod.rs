/*! Feature extraction

Each feature reduces the (possibly sampled) speeches to a [FeatureSeries]:
one value per unit of analysis (sentence, speech or word window), paired with its year.

Features implement [Metric]. Features that produce exactly one value per speech implement
[SpeechMetric] instead and are lifted to [Metric] by [PerSpeech]:
speeches without a year, or without a value, are skipped.
!*/
mod general;
mod lexical;
mod morphology;
mod pos;
mod series;
mod syntax;

pub use general::{SpeechLength, WordLength};
pub use lexical::{calculate_ttr, Ttr};
pub use morphology::{
    compound_ratio, orig_lemma_ratio, CompoundWords, LengthRatio, NounCompounds,
    COMPOUND_SEPARATOR,
};
pub use pos::PosProportion;
pub use series::FeatureSeries;
pub use syntax::{count_root_dependencies, RootDependencies, RootDependencyRatio};

use log::info;

use crate::speech::Speech;

/// A feature extractor.
pub trait Metric: Send + Sync {
    /// Key under which the feature is stored.
    fn name(&self) -> String;

    /// Reduce speeches to a series of (value, year).
    fn extract(&self, speeches: &[&Speech]) -> FeatureSeries;

    /// Whether the feature needs annotated speeches.
    fn needs_annotation(&self) -> bool {
        false
    }
}

/// A feature measured once per speech.
pub trait SpeechMetric: Send + Sync {
    fn name(&self) -> String;

    fn measure(&self, speech: &Speech) -> Option<f64>;

    fn needs_annotation(&self) -> bool {
        false
    }
}

/// Runs a [SpeechMetric] over every speech.
pub struct PerSpeech<M>(pub M);

impl<M: SpeechMetric> Metric for PerSpeech<M> {
    fn name(&self) -> String {
        self.0.name()
    }

    fn extract(&self, speeches: &[&Speech]) -> FeatureSeries {
        info!("[{}] measuring {} speeches", self.0.name(), speeches.len());
        speeches
            .iter()
            .filter_map(|speech| {
                let year = speech.year?;
                self.0.measure(speech).map(|value| (value, year))
            })
            .collect()
    }

    fn needs_annotation(&self) -> bool {
        self.0.needs_annotation()
    }
}

/// Every per-speech feature, by name.
pub fn speech_metrics() -> Vec<Box<dyn SpeechMetric>> {
    let mut metrics: Vec<Box<dyn SpeechMetric>> = vec![
        Box::<SpeechLength>::default(),
        Box::new(WordLength),
        Box::new(CompoundWords),
        Box::new(NounCompounds),
        Box::new(LengthRatio),
    ];
    for pos in PosProportion::defaults() {
        metrics.push(Box::new(pos));
    }
    metrics
}

/// Get a per-speech feature from its name.
pub fn speech_metric(name: &str) -> Option<Box<dyn SpeechMetric>> {
    speech_metrics().into_iter().find(|m| m.name() == name)
}

/// The full feature set, in run order.
pub fn all(ttr: Ttr) -> Vec<Box<dyn Metric>> {
    let mut metrics: Vec<Box<dyn Metric>> = vec![
        Box::new(PerSpeech(SpeechLength::default())),
        Box::new(PerSpeech(WordLength)),
        Box::new(RootDependencies),
        Box::new(RootDependencyRatio),
    ];
    for pos in PosProportion::defaults() {
        metrics.push(Box::new(PerSpeech(pos)));
    }
    metrics.push(Box::new(ttr));
    metrics.push(Box::new(PerSpeech(CompoundWords)));
    metrics.push(Box::new(PerSpeech(NounCompounds)));
    metrics.push(Box::new(PerSpeech(LengthRatio)));
    metrics
}
