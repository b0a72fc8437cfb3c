//! Resampling schemes.

use rand::Rng;

use crate::{Sample, Statistic};

/// A resampling scheme: turns one sample into a stream of resamples.
pub trait Re<T> {
    /// Type of each resample.
    type Item;
    /// Endless stream of resamples of `t`.
    fn re(&self, t: &T) -> impl Iterator<Item = Self::Item>;
}

mod bootstrap;
mod draws;

pub use bootstrap::{resample_into, Bootstrap};
pub use draws::Draws;

/// Simulates the sampling distribution of `statistic`: `draws` samples of
/// `size` observations taken with replacement from `population`.
///
/// This is how the precomputed sampling-distribution columns of the course
/// data are produced.
pub fn sampling_distribution<T, S, R>(
    population: &Sample<T>,
    statistic: &S,
    size: usize,
    draws: usize,
    rng: R,
) -> Sample<f64>
where
    T: Copy,
    S: Statistic<Sample<T>, f64>,
    R: Rng + Clone,
{
    Draws::new(size, rng)
        .re(population)
        .take(draws)
        .map(|sample| statistic.compute(&sample))
        .collect()
}
