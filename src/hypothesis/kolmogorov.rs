use statrs::distribution::ContinuousCDF;

use super::TestResult;
use crate::statistics::sorted;
use crate::Statistic;

/// One-sample Kolmogorov–Smirnov goodness-of-fit test against a fully
/// specified continuous distribution.
///
/// ```text
/// D = supₓ |Fₙ(x) - F(x)|
/// ```
/// The p-value uses the asymptotic Kolmogorov series. When the distribution's
/// parameters were estimated from the same sample, the p-value is conservative.
#[derive(Debug, Clone, Copy)]
pub struct KsTest<Dist> {
    /// Hypothesised distribution.
    pub distribution: Dist,
}

impl<Dist> KsTest<Dist> {
    /// Test against `distribution`.
    pub fn against(distribution: Dist) -> Self {
        Self { distribution }
    }
}

/// `P(√n·Dₙ > √n·d)` from the alternating series `2 Σ (-1)^(k-1) exp(-2k²nd²)`.
fn kolmogorov_p_value(d: f64, n: usize) -> f64 {
    if d <= 0.0 {
        return 1.0;
    }
    if d >= 1.0 {
        return 0.0;
    }

    let lambda_sq = d * d * n as f64;
    let mut p = 0.0;
    for k in 1..=100_i32 {
        let exponent = -2.0 * f64::from(k * k) * lambda_sq;
        if exponent < -700.0 {
            break;
        }
        let term = if k % 2 == 1 { exponent.exp() } else { -exponent.exp() };
        p += term;
        if term.abs() < 1e-15 {
            break;
        }
    }
    (2.0 * p).clamp(0.0, 1.0)
}

impl<D, Dist> Statistic<D, TestResult> for KsTest<Dist>
where
    D: AsRef<[f64]>,
    Dist: ContinuousCDF<f64, f64>,
{
    fn compute(&self, data: &D) -> TestResult {
        let points = sorted(data.as_ref());
        let n = points.len();
        if n == 0 {
            return TestResult::nan();
        }

        let n_f = n as f64;
        let mut d_max: f64 = 0.0;
        for (i, &x) in points.iter().enumerate() {
            let f_x = self.distribution.cdf(x);
            // D⁺ = (i+1)/n - F(xᵢ),  D⁻ = F(xᵢ) - i/n
            let d_plus = (i + 1) as f64 / n_f - f_x;
            let d_minus = f_x - i as f64 / n_f;
            d_max = d_max.max(d_plus).max(d_minus);
        }

        TestResult {
            statistic: d_max,
            p_value: kolmogorov_p_value(d_max, n),
        }
    }
}
