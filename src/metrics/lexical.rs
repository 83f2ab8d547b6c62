/*! Vocabulary diversity

Type/Token Ratio (TTR) is computed on fixed-size windows of consecutive words,
so that years with more speeches are not penalized.
For each year, the raw content of every speech is joined, and `draws` windows
of `window` words are taken at random starting positions.
!*/
use std::collections::{BTreeMap, HashSet};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{FeatureSeries, Metric};
use crate::sampling::DEFAULT_SEED;
use crate::speech::Speech;

/// TTR of a random window of `window` consecutive words.
///
/// Returns `None` if there are fewer than `window` words (or if `window` is 0).
pub fn calculate_ttr<R: Rng + ?Sized>(words: &[&str], window: usize, rng: &mut R) -> Option<f64> {
    if window == 0 || words.len() < window {
        return None;
    }

    let start = rng.gen_range(0..=words.len() - window);
    let types: HashSet<&str> = words[start..start + window].iter().copied().collect();

    Some(types.len() as f64 / window as f64)
}

#[derive(Debug, Clone)]
pub struct Ttr {
    window: usize,
    draws: usize,
    seed: u64,
}

impl Ttr {
    pub fn new(window: usize, draws: usize, seed: u64) -> Self {
        Self {
            window,
            draws,
            seed,
        }
    }
}

impl Default for Ttr {
    /// 1000 windows of 1000 words per year.
    fn default() -> Self {
        Self::new(1000, 1000, DEFAULT_SEED)
    }
}

impl Metric for Ttr {
    fn name(&self) -> String {
        "TTR".to_string()
    }

    fn extract(&self, speeches: &[&Speech]) -> FeatureSeries {
        info!(
            "computing TTR ({} draws of {} words per year)",
            self.draws, self.window
        );

        let mut by_year: BTreeMap<i32, Vec<&str>> = BTreeMap::new();
        for speech in speeches {
            if let (Some(year), Some(content)) = (speech.year, speech.content.as_deref()) {
                by_year
                    .entry(year)
                    .or_default()
                    .extend(content.split_whitespace());
            }
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut series = FeatureSeries::default();
        for (year, words) in by_year {
            if words.len() < self.window {
                warn!(
                    "{}: only {} words, at least {} needed for TTR",
                    year,
                    words.len(),
                    self.window
                );
                continue;
            }
            for _ in 0..self.draws {
                if let Some(ttr) = calculate_ttr(&words, self.window, &mut rng) {
                    series.push(ttr, year);
                }
            }
        }
        series
    }
}
