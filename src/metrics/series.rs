//! Feature series: values paired with the year they were observed in.
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureSeries {
    values: Vec<f64>,
    years: Vec<i32>,
}

impl FeatureSeries {
    /// Build a series from two aligned vectors.
    ///
    /// Returns `None` if lengths differ.
    pub fn new(values: Vec<f64>, years: Vec<i32>) -> Option<Self> {
        if values.len() != years.len() {
            return None;
        }
        Some(Self { values, years })
    }

    pub fn push(&mut self, value: f64, year: i32) {
        self.values.push(value);
        self.years.push(year);
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, i32)> + '_ {
        self.values.iter().copied().zip(self.years.iter().copied())
    }

    /// Copy of the series ordered by year (stable, so equal years keep their relative order).
    pub fn sorted_by_year(&self) -> Self {
        self.iter().sorted_by_key(|(_, year)| *year).collect()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<i32>) {
        (self.values, self.years)
    }
}

impl FromIterator<(f64, i32)> for FeatureSeries {
    fn from_iter<T: IntoIterator<Item = (f64, i32)>>(iter: T) -> Self {
        let (values, years) = iter.into_iter().unzip();
        Self { values, years }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched() {
        assert!(FeatureSeries::new(vec![1.0], vec![]).is_none());
        assert!(FeatureSeries::new(vec![1.0], vec![1999]).is_some());
    }

    #[test]
    fn sort() {
        let s: FeatureSeries = vec![(3.0, 2001), (1.0, 1999), (2.0, 2001), (0.5, 1980)]
            .into_iter()
            .collect();
        let sorted = s.sorted_by_year();
        assert_eq!(sorted.years(), &[1980, 1999, 2001, 2001]);
        assert_eq!(sorted.values(), &[0.5, 1.0, 3.0, 2.0]);
    }
}
