/*! Sentence-level syntactic complexity

Both metrics emit one value per sentence of every annotated speech.
Empty sentences have no count, and a ratio of 0.
!*/
use log::info;

use super::{FeatureSeries, Metric};
use crate::annotation::Sentence;
use crate::speech::Speech;

/// Count words directly governed by the sentence root.
///
/// Returns `(dependents, words)`.
/// A sentence without a root has no dependents.
pub fn count_root_dependencies(sentence: &Sentence) -> (usize, usize) {
    let dependents = match sentence.root() {
        Some(root) => sentence.words().iter().filter(|w| w.head == root).count(),
        None => 0,
    };
    (dependents, sentence.len())
}

fn per_sentence<F>(speeches: &[&Speech], keep_empty: bool, f: F) -> FeatureSeries
where
    F: Fn(&Sentence) -> f64,
{
    let mut series = FeatureSeries::default();
    for speech in speeches {
        let (year, doc) = match (speech.year, &speech.annotation) {
            (Some(year), Some(doc)) => (year, doc),
            _ => continue,
        };
        for sentence in doc.sentences().iter().filter(|s| keep_empty || !s.is_empty()) {
            series.push(f(sentence), year);
        }
    }
    series
}

/// Number of root dependents per sentence.
#[derive(Default)]
pub struct RootDependencies;

impl Metric for RootDependencies {
    fn name(&self) -> String {
        "root_dependencies".to_string()
    }

    fn extract(&self, speeches: &[&Speech]) -> FeatureSeries {
        info!("counting root dependents");
        per_sentence(speeches, false, |s| count_root_dependencies(s).0 as f64)
    }

    fn needs_annotation(&self) -> bool {
        true
    }
}

/// Number of root dependents per sentence, divided by the sentence length.
#[derive(Default)]
pub struct RootDependencyRatio;

impl Metric for RootDependencyRatio {
    fn name(&self) -> String {
        "root_dependencies_divided".to_string()
    }

    fn extract(&self, speeches: &[&Speech]) -> FeatureSeries {
        info!("counting root dependents relative to sentence length");
        per_sentence(speeches, true, |s| match count_root_dependencies(s) {
            (_, 0) => 0.0,
            (deps, words) => deps as f64 / words as f64,
        })
    }

    fn needs_annotation(&self) -> bool {
        true
    }
}
