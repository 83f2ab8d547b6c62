/*! Statistics over feature series

Pearson correlation between year and feature value (with a bucketed significance),
least squares fit of value against year, and per-year means.
!*/
use std::collections::BTreeMap;
use std::fmt;

use statrs::function::beta::beta_reg;

/// Significance of a correlation, as reported on plots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Significance {
    /// p < 0.001
    Strong,
    /// 0.001 <= p <= 0.05
    Value(f64),
    /// p > 0.05
    NotSignificant,
}

impl Significance {
    pub fn from_p(p: f64) -> Self {
        if p > 0.05 {
            Significance::NotSignificant
        } else if p >= 0.001 {
            Significance::Value(p)
        } else {
            Significance::Strong
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Significance::Strong => write!(f, "p < 0.001"),
            Significance::Value(p) => write!(f, "p = {:.3}", p),
            Significance::NotSignificant => write!(f, "p > 0.05"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub r: f64,
    pub p: f64,
}

impl Correlation {
    pub fn significance(&self) -> Significance {
        Significance::from_p(self.p)
    }
}

fn mean(xs: impl Iterator<Item = f64>) -> Option<f64> {
    let (n, sum) = xs.fold((0usize, 0.0), |(n, s), x| (n + 1, s + x));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Pearson correlation coefficient between years and values, with its two-sided p-value.
///
/// Returns `None` with fewer than 2 points, mismatched lengths, or a constant input.
pub fn pearson(years: &[i32], values: &[f64]) -> Option<Correlation> {
    let n = years.len();
    if n < 2 || n != values.len() {
        return None;
    }

    let mx = mean(years.iter().map(|y| f64::from(*y)))?;
    let my = mean(values.iter().copied())?;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in years.iter().zip(values) {
        let dx = f64::from(*x) - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    let r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);

    // With n-2 degrees of freedom, t = r*sqrt(df/(1-r^2)) and
    // the two-sided p-value of the t distribution is I_{1-r^2}(df/2, 1/2).
    let p = if n == 2 {
        1.0
    } else {
        let df = (n - 2) as f64;
        beta_reg(df / 2.0, 0.5, (1.0 - r * r).clamp(0.0, 1.0))
    };

    Some(Correlation { r, p })
}

/// Ordinary least squares fit of values against years.
///
/// Returns the fitted value for each input point, in input order.
/// If every year is the same, the fit is flat at the mean value.
pub fn linear_fit(years: &[i32], values: &[f64]) -> Vec<f64> {
    let (mx, my) = match (
        mean(years.iter().map(|y| f64::from(*y))),
        mean(values.iter().copied()),
    ) {
        (Some(mx), Some(my)) => (mx, my),
        _ => return Vec::new(),
    };

    let (sxy, sxx) = years
        .iter()
        .zip(values)
        .fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
            let dx = f64::from(*x) - mx;
            (sxy + dx * (y - my), sxx + dx * dx)
        });

    let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
    let intercept = my - slope * mx;

    years
        .iter()
        .map(|x| intercept + slope * f64::from(*x))
        .collect()
}

/// Mean value for each year.
pub fn yearly_means(years: &[i32], values: &[f64]) -> BTreeMap<i32, f64> {
    let mut acc: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for (year, value) in years.iter().zip(values) {
        let e = acc.entry(*year).or_insert((0.0, 0));
        e.0 += value;
        e.1 += 1;
    }
    acc.into_iter()
        .map(|(year, (sum, n))| (year, sum / n as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn perfect() {
        let c = pearson(&[1990, 1991, 1992, 1993], &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(close(c.r, 1.0));
        assert!(close(c.p, 0.0));
        assert_eq!(c.significance(), Significance::Strong);

        let c = pearson(&[1990, 1991, 1992], &[3.0, 2.0, 1.0]).unwrap();
        assert!(close(c.r, -1.0));
    }

    #[test]
    fn known_values() {
        // r = 0.8, n = 5 -> t = 2.3094, p = 0.1041 (two-sided)
        let years = [1, 2, 3, 4, 5];
        let values = [1.0, 3.0, 2.0, 5.0, 4.0];
        let c = pearson(&years, &values).unwrap();
        assert!(close(c.r, 0.8));
        assert!((c.p - 0.1041).abs() < 1e-3);
        assert_eq!(c.significance(), Significance::NotSignificant);
    }

    #[test]
    fn degenerate() {
        assert!(pearson(&[1990], &[1.0]).is_none());
        assert!(pearson(&[1990, 1991], &[1.0]).is_none());
        assert!(pearson(&[1990, 1990, 1990], &[1.0, 2.0, 3.0]).is_none());
        assert!(pearson(&[1990, 1991, 1992], &[1.0, 1.0, 1.0]).is_none());

        let c = pearson(&[1990, 1991], &[1.0, 5.0]).unwrap();
        assert_eq!(c.p, 1.0);
    }

    #[test]
    fn labels() {
        assert_eq!(Significance::from_p(0.0001).to_string(), "p < 0.001");
        assert_eq!(Significance::from_p(0.001).to_string(), "p = 0.001");
        assert_eq!(Significance::from_p(0.0234).to_string(), "p = 0.023");
        assert_eq!(Significance::from_p(0.05).to_string(), "p = 0.050");
        assert_eq!(Significance::from_p(0.051).to_string(), "p > 0.05");
    }

    #[test]
    fn fit() {
        let fitted = linear_fit(&[2000, 1990, 2010], &[2.0, 1.0, 3.0]);
        assert_eq!(fitted.len(), 3);
        assert!(close(fitted[0], 2.0));
        assert!(close(fitted[1], 1.0));
        assert!(close(fitted[2], 3.0));
    }

    #[test]
    fn fit_flat() {
        let fitted = linear_fit(&[2000, 2000], &[1.0, 3.0]);
        assert_eq!(fitted, vec![2.0, 2.0]);
        assert!(linear_fit(&[], &[]).is_empty());
    }

    #[test]
    fn means() {
        let m = yearly_means(&[1990, 1991, 1990], &[1.0, 5.0, 2.0]);
        assert_eq!(m.get(&1990), Some(&1.5));
        assert_eq!(m.get(&1991), Some(&5.0));
    }
}
