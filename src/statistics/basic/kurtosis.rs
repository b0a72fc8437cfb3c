use num_traits::{Float, FromPrimitive};
use crate::statistics::*;
use super::{central_sums, lit};

/// Tail weight relative to the normal, as excess kurtosis `γ₂ = κ̂₄ / κ̂₂²`.
///
/// Zero for normal data, negative for flat samples. The unbiased form (the
/// default) needs at least 4 observations.
#[derive(Debug, Clone, Copy)]
pub struct Kurtosis {
    /// Apply the small-sample correction.
    pub unbiased: bool,
}

impl Kurtosis {
    /// Plain moment ratio minus 3.
    pub const BIASED: Self = Self { unbiased: false };

    /// Choose the corrected or the plain estimator.
    pub fn new(unbiased: bool) -> Self {
        Self { unbiased }
    }
}

impl Default for Kurtosis {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<D, T> Statistic<D, T> for Kurtosis
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();
        let n = slice.len();
        if n < 2 || (n < 4 && self.unbiased) {
            return T::nan();
        }

        let Some(n_f) = T::from_usize(n) else {
            return T::nan();
        };
        let mean = Mean.compute(data);
        let (sum2, sum4) = central_sums(slice, mean, 4);

        let m2 = sum2 / n_f;
        let m4 = sum4 / n_f;
        if m2 == T::zero() {
            return T::nan();
        }

        if self.unbiased {
            // κ̂₄ = n²[(n+1)m4 - 3(n-1)m2²] / [(n-1)(n-2)(n-3)]
            let n1 = n_f - T::one();
            let n2 = n_f - lit(2);
            let n3 = n_f - lit(3);

            let k2 = (n_f / n1) * m2;
            let numerator = n_f * n_f * ((n_f + T::one()) * m4 - lit::<T>(3) * n1 * m2 * m2);
            let k4 = numerator / (n1 * n2 * n3);

            k4 / (k2 * k2)
        } else {
            m4 / (m2 * m2) - lit(3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn biased_uniform_grid_is_platykurtic() {
        // Discrete uniform on 1..=5: m4/m2² = 6.8/4 = 1.7
        let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(Kurtosis::BIASED.compute(&data), 1.7 - 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Kurtosis::default().compute(&data), -1.2, epsilon = 1e-12);
    }

    #[test]
    fn outlier_makes_tails_heavy() {
        let data = [0.0_f64, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0];
        assert!(Kurtosis::default().compute(&data) > 3.0);
    }

    #[test]
    fn needs_four_observations() {
        let k: f64 = Kurtosis::default().compute(&[1.0, 2.0, 3.0]);
        assert!(k.is_nan());
    }
}
