use statrs::distribution::{Binomial, DiscreteCDF};

use super::TestResult;
use crate::Statistic;

/// Exact sign test of `H₀: median = m₀`.
///
/// Observations equal to `m₀` are dropped. The statistic is the number of
/// observations above `m₀`; under H₀ it is `Binomial(n, 1/2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignTest {
    /// Median under H₀.
    pub median: f64,
}

impl SignTest {
    /// Test `H₀: median = median`.
    pub fn new(median: f64) -> Self {
        Self { median }
    }
}

impl<D: AsRef<[f64]>> Statistic<D, TestResult> for SignTest {
    fn compute(&self, data: &D) -> TestResult {
        let (above, below) = data.as_ref().iter().fold((0_u64, 0_u64), |(a, b), &x| {
            if x > self.median {
                (a + 1, b)
            } else if x < self.median {
                (a, b + 1)
            } else {
                (a, b)
            }
        });

        let n = above + below;
        if n == 0 {
            return TestResult { statistic: 0.0, p_value: 1.0 };
        }
        let Ok(binomial) = Binomial::new(0.5, n) else {
            return TestResult::nan();
        };

        let lower_tail = binomial.cdf(above);
        let upper_tail = if above == 0 { 1.0 } else { binomial.sf(above - 1) };

        TestResult {
            statistic: above as f64,
            p_value: (2.0 * lower_tail.min(upper_tail)).min(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn all_above_gives_exact_tail() {
        // 8 of 8 above: p = 2 · 2⁻⁸
        let data = [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let result = SignTest::new(1.0).compute(&data);
        assert_eq!(result.statistic, 8.0);
        assert_relative_eq!(result.p_value, 2.0 / 256.0, max_relative = 1e-10);
    }

    #[test]
    fn ties_are_dropped_and_balance_gives_one() {
        let data = [1.0, 5.0, 5.0, 9.0];
        let result = SignTest::new(5.0).compute(&data);
        assert_eq!(result.statistic, 1.0);
        assert_relative_eq!(result.p_value, 1.0);
    }

    #[test]
    fn vitamin_b12_median_test() {
        // 13 of 20 observations exceed 0.5: p = 2·P(X ≥ 13), X ~ Bin(20, ½)
        let b12 = crate::define_data().vitamin_b12;
        let result = SignTest::new(0.5).compute(&b12);
        assert_eq!(result.statistic, 13.0);
        assert_relative_eq!(result.p_value, 2.0 * 137_980.0 / 1_048_576.0, max_relative = 1e-7);
    }
}
