use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::check_confidence;
use crate::{Interval, Mean, Result, SEMean, Statistic};

/// Student t confidence interval for the population mean:
/// `x̄ ± t_{1-α/2, n-1} · s/√n`.
#[derive(Debug, Clone, Copy)]
pub struct MeanInterval {
    confidence: f64,
}

impl MeanInterval {
    /// Fails on a confidence outside (0, 1).
    pub fn new(confidence: f64) -> Result<Self> {
        Ok(Self { confidence: check_confidence(confidence)? })
    }
}

impl<D: AsRef<[f64]>> Statistic<D, Interval<f64>> for MeanInterval {
    fn compute(&self, data: &D) -> Interval<f64> {
        let n = data.as_ref().len();
        let se: f64 = SEMean::default().compute(data);
        if n < 2 || se.is_nan() {
            return Interval::nan();
        }
        let Ok(t) = StudentsT::new(0.0, 1.0, (n - 1) as f64) else {
            return Interval::nan();
        };

        let critical = t.inverse_cdf(0.5 + self.confidence / 2.0);
        Interval::around(Mean.compute(data), critical * se).with_confidence(self.confidence)
    }
}
