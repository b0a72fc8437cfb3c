//! Interval estimators: Student t for the mean, chi-square for the variance,
//! Wald/Wilson for proportions, and the percentile bootstrap.

mod mean;
mod variance;
mod proportion;
mod bootstrap;

pub use mean::MeanInterval;
pub use variance::VarianceInterval;
pub use proportion::{proportion_interval, ProportionInterval, ProportionMethod};
pub use bootstrap::PercentileBootstrap;

use statrs::distribution::{ContinuousCDF, Normal};

/// Two-sided standard normal critical value `z_{1-α/2}`.
pub(crate) fn normal_critical(confidence: f64) -> f64 {
    Normal::new(0.0, 1.0).map_or(f64::NAN, |n| n.inverse_cdf(0.5 + confidence / 2.0))
}
