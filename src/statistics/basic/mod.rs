mod variance;
mod skewness;
mod kurtosis;
mod proportion;

pub use variance::Variance;
pub use skewness::Skewness;
pub use kurtosis::Kurtosis;
pub use proportion::Proportion;

use num_traits::{Float, FromPrimitive};

/// Kahan-compensated sums of the second and `k`-th powers of deviations from
/// `mean`, returned as `(Σ d², Σ dᵏ)`.
pub(crate) fn central_sums<T: Float>(slice: &[T], mean: T, k: i32) -> (T, T) {
    let mut sum2 = T::zero();
    let mut sumk = T::zero();
    let mut c2 = T::zero();
    let mut ck = T::zero();

    for &x in slice {
        let dev = x - mean;

        let y2 = dev * dev - c2;
        let t2 = sum2 + y2;
        c2 = (t2 - sum2) - y2;
        sum2 = t2;

        let yk = dev.powi(k) - ck;
        let tk = sumk + yk;
        ck = (tk - sumk) - yk;
        sumk = tk;
    }

    (sum2, sumk)
}

/// Small integer constant in the float field.
#[inline]
pub(crate) fn lit<T: Float + FromPrimitive>(value: u8) -> T {
    T::from_u8(value).unwrap_or_else(T::nan)
}
