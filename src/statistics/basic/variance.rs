use num_traits::{Float, FromPrimitive};
use crate::statistics::*;
use super::central_sums;

/// Variance with a configurable delta degrees of freedom.
#[derive(Debug, Clone, Copy)]
pub struct Variance {
    /// Delta degrees of freedom: the divisor is `n - ddof`.
    pub ddof: usize,
}

impl Variance {
    /// Creates a new `Variance` estimator with the given degrees of freedom adjustment.
    ///
    /// - `ddof = 0`: population variance (biased, maximum likelihood under normality)
    /// - `ddof = 1`: sample variance (Bessel's correction), the default
    pub fn new(ddof: usize) -> Self {
        Variance { ddof }
    }
}

impl Default for Variance {
    fn default() -> Self {
        Variance { ddof: 1 }
    }
}

impl<D, T> Statistic<D, T> for Variance
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();

        if slice.len() <= self.ddof || slice.len() < 2 {
            return T::nan();
        }

        let mean = Mean.compute(data);
        let (sq_sum, _) = central_sums(slice, mean, 2);

        match T::from_usize(slice.len() - self.ddof) {
            Some(dof) => sq_sum / dof,
            None => T::nan(),
        }
    }
}
