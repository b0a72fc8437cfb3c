use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::check_confidence;
use crate::{Interval, Result, Statistic, Variance};

/// Chi-square confidence interval for the variance of a normal population:
/// `[(n-1)s²/χ²_{1-α/2}, (n-1)s²/χ²_{α/2}]` with `n-1` degrees of freedom.
#[derive(Debug, Clone, Copy)]
pub struct VarianceInterval {
    confidence: f64,
}

impl VarianceInterval {
    /// Fails on a confidence outside (0, 1).
    pub fn new(confidence: f64) -> Result<Self> {
        Ok(Self { confidence: check_confidence(confidence)? })
    }
}

impl<D: AsRef<[f64]>> Statistic<D, Interval<f64>> for VarianceInterval {
    fn compute(&self, data: &D) -> Interval<f64> {
        let n = data.as_ref().len();
        let s2: f64 = Variance::default().compute(data);
        if n < 2 || s2.is_nan() {
            return Interval::nan();
        }
        let dof = (n - 1) as f64;
        let Ok(chi2) = ChiSquared::new(dof) else {
            return Interval::nan();
        };

        let alpha = 1.0 - self.confidence;
        let lower = dof * s2 / chi2.inverse_cdf(1.0 - alpha / 2.0);
        let upper = dof * s2 / chi2.inverse_cdf(alpha / 2.0);
        Interval::new(lower, upper)
            .with_estimate(s2)
            .with_confidence(self.confidence)
    }
}
