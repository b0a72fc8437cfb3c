//! Hypothesis tests: parametric (t), goodness of fit (Kolmogorov–Smirnov)
//! and non-parametric (sign, rank-sum).

mod mean;
mod kolmogorov;
mod sign;
mod rank_sum;

pub use mean::TTest;
pub use kolmogorov::KsTest;
pub use sign::SignTest;
pub use rank_sum::RankSumTest;

/// Outcome of a two-sided test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    /// Observed test statistic.
    pub statistic: f64,
    /// Two-sided p-value.
    pub p_value: f64,
}

impl TestResult {
    /// Result for samples too small or degenerate to test.
    pub fn nan() -> Self {
        Self { statistic: f64::NAN, p_value: f64::NAN }
    }

    /// Whether H₀ is rejected at significance level `alpha`.
    pub fn rejects(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}
