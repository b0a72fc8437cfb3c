//! Point statistics and intervals.
//!
//! Everything here is a [`Statistic`]: a value object that maps a sample
//! (anything that is `AsRef<[T]>`) to an estimate. Degenerate samples produce
//! NaN rather than panicking.

/// A statistic computed over a sample of type `D`, producing a `T`.
pub trait Statistic<D, T> {
    /// Evaluate on `data`.
    fn compute(&self, data: &D) -> T;
}

mod mean;
mod basic;
mod se;
mod quantile;
mod ci;

pub use mean::Mean;
pub use basic::*;
pub use se::SEMean;
pub use quantile::{Quantile, QuantileInterval};
pub use ci::{FormattedInterval, Interval, IntervalStyle};
pub(crate) use quantile::sorted;

// Pairs and triples of statistics evaluate component-wise over the same data.

impl<D, T1, T2, S1, S2> Statistic<D, (T1, T2)> for (S1, S2)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2) {
        (self.0.compute(data), self.1.compute(data))
    }
}

impl<D, T1, T2, T3, S1, S2, S3> Statistic<D, (T1, T2, T3)> for (S1, S2, S3)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
    S3: Statistic<D, T3>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2, T3) {
        (
            self.0.compute(data),
            self.1.compute(data),
            self.2.compute(data),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tuple_statistics_share_the_sample() {
        let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let (mean, var, skew): (f64, f64, f64) =
            (Mean, Variance::default(), Skewness::default()).compute(&data);
        assert_relative_eq!(mean, 3.0);
        assert_relative_eq!(var, 2.5);
        assert_relative_eq!(skew, 0.0);
    }
}
