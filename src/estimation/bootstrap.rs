use rand::{Rng, SeedableRng};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::check_confidence;
use crate::resample::resample_into;
use crate::{
    Environment, Error, Interval, QuantileInterval, Result, Sample, SeededRng, Statistic, Variance,
};

/// Percentile bootstrap for any statistic returning `f64`.
///
/// One seed per replicate is drawn serially from the caller's generator, so
/// the replicates are identical with or without the `rayon` feature.
#[derive(Debug, Clone, Copy)]
pub struct PercentileBootstrap<S> {
    /// Statistic evaluated on every resample.
    pub statistic: S,
    replicates: usize,
    confidence: f64,
}

impl<S> PercentileBootstrap<S> {
    /// Fails on zero replicates or a confidence outside (0, 1).
    pub fn new(statistic: S, replicates: usize, confidence: f64) -> Result<Self> {
        if replicates == 0 {
            return Err(Error::InvalidParameter("bootstrap needs at least one replicate".into()));
        }
        Ok(Self { statistic, replicates, confidence: check_confidence(confidence)? })
    }

    /// Uses the replicate count configured for the session.
    pub fn from_environment(statistic: S, env: &Environment, confidence: f64) -> Result<Self> {
        Self::new(statistic, env.bootstrap_replicate_count(), confidence)
    }

    /// Number of resamples drawn.
    pub fn replicate_count(&self) -> usize {
        self.replicates
    }

    /// Statistic evaluated on each bootstrap resample.
    pub fn replicates<T, R>(&self, sample: &Sample<T>, rng: &mut R) -> Sample<f64>
    where
        T: Copy + Sync,
        S: Statistic<Sample<T>, f64> + Sync,
        R: Rng,
    {
        let seeds: Vec<u64> = (0..self.replicates).map(|_| rng.next_u64()).collect();
        let data = sample.as_ref();
        let one = |seed: &u64| {
            let mut rng = SeededRng::seed_from_u64(*seed);
            let mut buffer = Vec::with_capacity(data.len());
            resample_into(data, data.len(), &mut rng, &mut buffer);
            self.statistic.compute(&Sample::new(buffer))
        };

        #[cfg(feature = "rayon")]
        let values: Vec<f64> = seeds.par_iter().map(one).collect();
        #[cfg(not(feature = "rayon"))]
        let values: Vec<f64> = seeds.iter().map(one).collect();

        debug!(replicates = values.len(), n = data.len(), "bootstrap replicates drawn");
        Sample::new(values)
    }

    /// Percentile interval around the statistic of the original sample.
    pub fn interval<T, R>(&self, sample: &Sample<T>, rng: &mut R) -> Interval<f64>
    where
        T: Copy + Sync,
        S: Statistic<Sample<T>, f64> + Sync,
        R: Rng,
    {
        if sample.is_empty() {
            return Interval::nan();
        }
        let replicates = self.replicates(sample, rng);
        let (lower, upper) = QuantileInterval::percentile(self.confidence).compute(&replicates);
        Interval::new(lower, upper)
            .with_estimate(self.statistic.compute(sample))
            .with_confidence(self.confidence)
    }

    /// Standard deviation of the bootstrap replicates.
    pub fn standard_error<T, R>(&self, sample: &Sample<T>, rng: &mut R) -> f64
    where
        T: Copy + Sync,
        S: Statistic<Sample<T>, f64> + Sync,
        R: Rng,
    {
        let replicates = self.replicates(sample, rng);
        let variance: f64 = Variance::default().compute(&replicates);
        variance.sqrt()
    }
}
