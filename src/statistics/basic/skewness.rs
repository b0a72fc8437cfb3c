use num_traits::{Float, FromPrimitive};
use crate::statistics::*;
use super::{central_sums, lit};

/// Asymmetry of a sample, `γ₁ = κ̂₃ / κ̂₂^{3/2}`.
///
/// With `unbiased` (the default) the cumulants carry the small-sample
/// correction, which needs at least 3 observations; otherwise the plain
/// central moments are used. Right-skewed data such as vitamin B12 gives a
/// positive value.
#[derive(Debug, Clone, Copy)]
pub struct Skewness {
    /// Apply the small-sample correction.
    pub unbiased: bool,
}

impl Skewness {
    /// Plain moment ratio, no small-sample correction.
    pub const BIASED: Self = Self { unbiased: false };

    /// Choose the corrected or the plain estimator.
    pub fn new(unbiased: bool) -> Self {
        Self { unbiased }
    }
}

impl Default for Skewness {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<D, T> Statistic<D, T> for Skewness
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();
        let n = slice.len();
        if n < 2 || (n < 3 && self.unbiased) {
            return T::nan();
        }

        let Some(n_f) = T::from_usize(n) else {
            return T::nan();
        };
        let mean = Mean.compute(data);
        let (sum2, sum3) = central_sums(slice, mean, 3);

        let m2 = sum2 / n_f;
        let m3 = sum3 / n_f;

        let (numerator, denom) = if self.unbiased {
            // κ̂₂ = n/(n-1)·m2,  κ̂₃ = n²/((n-1)(n-2))·m3
            let n1 = n_f - T::one();
            let n2 = n_f - lit(2);
            let k2 = (n_f / n1) * m2;
            let k3 = (n_f * n_f) / (n1 * n2) * m3;
            (k3, k2.sqrt().powi(3))
        } else {
            (m3, m2.sqrt().powi(3))
        };

        if denom == T::zero() {
            T::nan()
        } else {
            numerator / denom
        }
    }
}
