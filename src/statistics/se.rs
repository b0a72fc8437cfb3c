use num_traits::{Float, FromPrimitive};
use crate::Variance;
use super::Statistic;

/// Standard error of the sample mean:
/// ```text
/// SE = sqrt( variance / n )
/// ```
/// with the variance taken from the configured estimator (Bessel-corrected by default).
#[derive(Debug, Clone, Copy, Default)]
pub struct SEMean {
    variance: Variance,
}

impl SEMean {
    /// Creates a new `SEMean` with a custom variance estimator.
    pub fn with_variance(variance: Variance) -> Self {
        Self { variance }
    }
}

impl<D, T> Statistic<D, T> for SEMean
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();
        let var_est = self.variance.compute(data);
        if var_est.is_nan() {
            return T::nan();
        }

        match T::from_usize(slice.len()) {
            // Clamp tiny negatives from rounding to zero
            Some(n) => (var_est / n).max(T::zero()).sqrt(),
            None => T::nan(),
        }
    }
}
