use std::cmp::Ordering;

use statrs::distribution::{ContinuousCDF, Normal};

use super::TestResult;
use crate::Statistic;

/// Wilcoxon rank-sum (Mann–Whitney U) test for two independent samples.
///
/// The statistic is `U = R₁ - n₁(n₁+1)/2`, where `R₁` is the rank sum of the
/// first sample with ties given average ranks. The two-sided p-value uses the
/// normal approximation with tie and continuity corrections. NaN observations
/// are dropped from both samples before ranking.
#[derive(Debug, Clone, Copy)]
pub struct RankSumTest {
    /// Shift `|U - μ|` by ½ before standardising. On by default.
    pub continuity_correction: bool,
}

impl Default for RankSumTest {
    fn default() -> Self {
        Self { continuity_correction: true }
    }
}

/// Average ranks (1-based) of the pooled values plus `Σ (t³ - t)` over tie groups.
fn average_ranks(pooled: &[f64]) -> (Vec<f64>, f64) {
    let mut order: Vec<usize> = (0..pooled.len()).collect();
    order.sort_by(|&a, &b| pooled[a].partial_cmp(&pooled[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; pooled.len()];
    let mut tie_term = 0.0;
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && pooled[order[end]] == pooled[order[start]] {
            end += 1;
        }
        let rank = (start + end + 1) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        let t = (end - start) as f64;
        tie_term += t * t * t - t;
        start = end;
    }
    (ranks, tie_term)
}

impl<A, B> Statistic<(A, B), TestResult> for RankSumTest
where
    A: AsRef<[f64]>,
    B: AsRef<[f64]>,
{
    fn compute(&self, data: &(A, B)) -> TestResult {
        let observed =
            |xs: &[f64]| -> Vec<f64> { xs.iter().copied().filter(|x| !x.is_nan()).collect() };
        let (first, second) = (observed(data.0.as_ref()), observed(data.1.as_ref()));
        let (n1, n2) = (first.len() as f64, second.len() as f64);
        if first.is_empty() || second.is_empty() {
            return TestResult::nan();
        }

        let pooled: Vec<f64> = first.iter().chain(&second).copied().collect();
        let (ranks, tie_term) = average_ranks(&pooled);
        let r1: f64 = ranks[..first.len()].iter().sum();
        let u = r1 - n1 * (n1 + 1.0) / 2.0;

        let n = n1 + n2;
        let mean_u = n1 * n2 / 2.0;
        let var_u = n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
        if !(var_u > 0.0) {
            return TestResult { statistic: u, p_value: f64::NAN };
        }

        let correction = if self.continuity_correction { 0.5 } else { 0.0 };
        let z = ((u - mean_u).abs() - correction).max(0.0) / var_u.sqrt();
        let Ok(normal) = Normal::new(0.0, 1.0) else {
            return TestResult::nan();
        };

        TestResult {
            statistic: u,
            p_value: (2.0 * normal.sf(z)).min(1.0),
        }
    }
}
