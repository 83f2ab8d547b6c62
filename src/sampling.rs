//! Per-year capped random sampling.
//!
//! Sampling is seeded: for a given cap and seed, the same collection always yields the same subset.
use std::collections::BTreeMap;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::speech::Speech;

pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    cap: Option<usize>,
    seed: u64,
}

impl Sampler {
    /// `cap` is the maximum number of speeches kept per year.
    /// `None` (or `Some(0)`) means no sampling at all.
    pub fn new(cap: Option<usize>, seed: u64) -> Self {
        Self {
            cap: cap.filter(|c| *c > 0),
            seed,
        }
    }

    /// A sampler that keeps everything.
    pub fn all() -> Self {
        Self::new(None, DEFAULT_SEED)
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }

    /// Draw at most `cap` speeches per year.
    ///
    /// Speeches without a year are dropped when sampling.
    /// Without a cap, the whole collection is returned, in order.
    pub fn sample<'a>(&self, speeches: &'a [Speech]) -> Vec<&'a Speech> {
        self.sample_indices(speeches)
            .into_iter()
            .map(|idx| &speeches[idx])
            .collect()
    }

    /// Same as [Sampler::sample], returning positions in `speeches`.
    pub fn sample_indices(&self, speeches: &[Speech]) -> Vec<usize> {
        let cap = match self.cap {
            Some(cap) => cap,
            None => return (0..speeches.len()).collect(),
        };

        let mut by_year: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (idx, speech) in speeches.iter().enumerate() {
            if let Some(year) = speech.year {
                by_year.entry(year).or_default().push(idx);
            }
        }

        let mut sampled = Vec::new();
        for (year, group) in by_year {
            // each year gets its own generator so that a year's subset
            // does not depend on the other years.
            let mut rng = StdRng::seed_from_u64(self.seed);
            let amount = cap.min(group.len());
            debug!("{}: sampling {}/{} speeches", year, amount, group.len());
            sampled.extend(group.choose_multiple(&mut rng, amount).copied());
        }

        sampled
    }

    /// Keep only the sampled speeches.
    pub fn select(&self, speeches: Vec<Speech>) -> Vec<Speech> {
        if self.cap.is_none() {
            return speeches;
        }
        let indices = self.sample_indices(&speeches);
        let mut slots: Vec<Option<Speech>> = speeches.into_iter().map(Some).collect();
        indices
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect()
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn corpus() -> Vec<Speech> {
        let mut speeches = Vec::new();
        for (year, count) in [(1980, 10), (1990, 3), (2000, 25)] {
            for i in 0..count {
                speeches.push(Speech::new(format!("{}-{}", year, i), Some(year)));
            }
        }
        speeches.push(Speech::new("no-year", None));
        speeches
    }

    fn ids(sample: &[&Speech]) -> Vec<String> {
        sample.iter().map(|s| s.id.clone()).collect()
    }

    fn per_year(sample: &[&Speech]) -> HashMap<i32, usize> {
        let mut counts = HashMap::new();
        for s in sample {
            *counts.entry(s.year.unwrap()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn bypass() {
        let c = corpus();
        let s = Sampler::all().sample(&c);
        assert_eq!(s.len(), c.len());

        let s = Sampler::new(Some(0), 1).sample(&c);
        assert_eq!(s.len(), c.len());
    }

    #[test]
    fn capped() {
        let c = corpus();
        let s = Sampler::new(Some(5), DEFAULT_SEED).sample(&c);
        let counts = per_year(&s);
        assert_eq!(counts[&1980], 5);
        assert_eq!(counts[&1990], 3);
        assert_eq!(counts[&2000], 5);
        assert_eq!(s.len(), 13);
        assert!(s.iter().all(|sp| sp.year.is_some()));
    }

    #[test]
    fn reproducible() {
        let c = corpus();
        let sampler = Sampler::new(Some(4), DEFAULT_SEED);
        assert_eq!(ids(&sampler.sample(&c)), ids(&sampler.sample(&c)));
    }

    #[test]
    fn no_duplicates() {
        let c = corpus();
        let s = Sampler::new(Some(7), 3).sample(&c);
        let mut i = ids(&s);
        let n = i.len();
        i.sort();
        i.dedup();
        assert_eq!(i.len(), n);
    }

    #[test]
    fn select_matches_sample() {
        let c = corpus();
        let sampler = Sampler::new(Some(6), 11);
        let borrowed = ids(&sampler.sample(&c));
        let owned: Vec<String> = sampler.select(corpus()).into_iter().map(|s| s.id).collect();
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn resampling_keeps_everything() {
        let sampler = Sampler::new(Some(5), DEFAULT_SEED);
        let selected = sampler.select(corpus());
        let mut first = ids(&selected.iter().collect::<Vec<_>>());
        let mut again = ids(&sampler.sample(&selected));
        first.sort();
        again.sort();
        assert_eq!(first, again);
    }

    #[test]
    fn year_independent() {
        // adding speeches to another year doesn't change 1980's subset
        let c = corpus();
        let mut bigger = corpus();
        bigger.push(Speech::new("2000-extra", Some(2000)));

        let sampler = Sampler::new(Some(4), DEFAULT_SEED);
        let year_ids = |sample: Vec<&Speech>| -> Vec<String> {
            sample
                .into_iter()
                .filter(|s| s.year == Some(1980))
                .map(|s| s.id.clone())
                .collect()
        };
        assert_eq!(
            year_ids(sampler.sample(&c)),
            year_ids(sampler.sample(&bigger))
        );
    }
}
