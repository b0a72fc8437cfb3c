use statrs::distribution::{ContinuousCDF, StudentsT};

use super::TestResult;
use crate::{Mean, SEMean, Statistic};

/// One-sample Student t-test of `H₀: μ = μ₀` against the two-sided alternative.
///
/// Assumes an i.i.d. sample from a roughly normal population; needs n ≥ 2 and a
/// non-constant sample, otherwise the result is NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct TTest {
    /// Mean under H₀.
    pub null_mean: f64,
}

impl TTest {
    /// Test `H₀: μ = null_mean`.
    pub fn new(null_mean: f64) -> Self {
        Self { null_mean }
    }
}

impl<D: AsRef<[f64]>> Statistic<D, TestResult> for TTest {
    fn compute(&self, data: &D) -> TestResult {
        let n = data.as_ref().len();
        let se: f64 = SEMean::default().compute(data);
        if n < 2 || !(se > 0.0) {
            return TestResult::nan();
        }

        let mean: f64 = Mean.compute(data);
        let t = (mean - self.null_mean) / se;
        let Ok(dist) = StudentsT::new(0.0, 1.0, (n - 1) as f64) else {
            return TestResult::nan();
        };

        TestResult {
            statistic: t,
            p_value: (2.0 * dist.sf(t.abs())).min(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn magnesium_against_fifty() {
        let magnesium = crate::define_data().magnesium;
        let result = TTest::new(50.0).compute(&magnesium);
        assert_relative_eq!(result.statistic, 1.1377666540831552, max_relative = 1e-10);
        assert_relative_eq!(result.p_value, 0.2693627209871594, max_relative = 1e-6);
        assert!(!result.rejects(0.05));
    }

    #[test]
    fn centred_sample_has_unit_p_value() {
        let result = TTest::new(3.0).compute(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(result.statistic, 0.0);
        assert_relative_eq!(result.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_sample_is_untestable() {
        assert!(TTest::new(0.0).compute(&[2.0, 2.0, 2.0]).p_value.is_nan());
    }
}
