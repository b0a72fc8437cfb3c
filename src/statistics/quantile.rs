use std::cmp::Ordering;

use super::Statistic;

/// Copies the sample, drops NaNs, and sorts ascending.
pub(crate) fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Index of the type-1 quantile in a sorted sample of length `n > 0`:
/// `i = ceil(n·p) - 1`, clamped to `[0, n-1]`.
#[inline]
fn type1_index(n: usize, p: f64) -> usize {
    ((n as f64 * p).ceil() as usize).saturating_sub(1).min(n - 1)
}

/// Discrete quantile estimator (inverse empirical CDF).
///
/// ```text
/// Q(p) = inf { x : Fₙ(x) ≥ p }
/// ```
/// This corresponds to R's type=1 quantiles and requires no interpolation.
/// NaN observations are ignored; an empty sample yields NaN.
#[derive(Debug, Clone, Copy)]
pub struct Quantile {
    p: f64,
}

impl Quantile {
    /// Creates a quantile estimator for probability `p`, clamped into `[0, 1]`.
    #[inline]
    pub fn new(p: f64) -> Self {
        Self { p: p.clamp(0.0, 1.0) }
    }

    /// Type-1 median: the lower middle value for even `n`.
    #[inline]
    pub fn median() -> Self {
        Self { p: 0.5 }
    }
}

impl<D: AsRef<[f64]>> Statistic<D, f64> for Quantile {
    fn compute(&self, data: &D) -> f64 {
        let points = sorted(data.as_ref());
        if points.is_empty() {
            return f64::NAN;
        }
        points[type1_index(points.len(), self.p)]
    }
}

/// Pair of type-1 quantiles `(Q(lower), Q(upper))`, e.g. a percentile interval.
#[derive(Debug, Clone, Copy)]
pub struct QuantileInterval {
    lower: f64,
    upper: f64,
}

impl QuantileInterval {
    /// Creates interval estimator for `[lower, upper]` probabilities.
    #[inline]
    pub fn new(lower: f64, upper: f64) -> Self {
        let lower = lower.clamp(0.0, 1.0);
        let upper = upper.clamp(lower, 1.0);
        Self { lower, upper }
    }

    /// Central interval holding `confidence` of the mass.
    #[inline]
    pub fn percentile(confidence: f64) -> Self {
        let alpha = 1.0 - confidence;
        Self::new(alpha / 2.0, 1.0 - alpha / 2.0)
    }
}

impl<D: AsRef<[f64]>> Statistic<D, (f64, f64)> for QuantileInterval {
    fn compute(&self, data: &D) -> (f64, f64) {
        let points = sorted(data.as_ref());
        if points.is_empty() {
            return (f64::NAN, f64::NAN);
        }
        let n = points.len();
        (points[type1_index(n, self.lower)], points[type1_index(n, self.upper)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type1_median_of_even_sample_takes_lower_middle() {
        assert_eq!(Quantile::median().compute(&[4.0, 1.0, 3.0, 2.0]), 2.0);
    }

    #[test]
    fn extremes_map_to_min_and_max() {
        let data = [5.0, f64::NAN, 1.0, 9.0];
        assert_eq!(Quantile::new(0.0).compute(&data), 1.0);
        assert_eq!(Quantile::new(1.0).compute(&data), 9.0);
    }

    #[test]
    fn percentile_interval_on_grid() {
        let data: Vec<f64> = (1..=100).map(f64::from).collect();
        assert_eq!(QuantileInterval::percentile(0.9).compute(&data), (5.0, 95.0));
    }

    #[test]
    fn empty_is_nan() {
        assert!(Quantile::median().compute(&Vec::<f64>::new()).is_nan());
    }
}
