use rand::Rng;

use super::{resample_into, Re};
use crate::Sample;

/// Repeated fixed-size draws with replacement, e.g. the size-5 draws behind a
/// sampling distribution of the mean.
#[derive(Clone, Copy, Debug)]
pub struct Draws<R: Rng> {
    /// Observations per draw.
    pub size: usize,
    /// Generator, cloned on every call to [`Re::re`].
    pub rng: R,
}

impl<R: Rng> Draws<R> {
    /// Draws of `size` observations.
    pub fn new(size: usize, rng: R) -> Self {
        Self { size, rng }
    }
}

impl<T: Copy, R: Rng + Clone> Re<Sample<T>> for Draws<R> {
    type Item = Sample<T>;

    fn re(&self, population: &Sample<T>) -> impl Iterator<Item = Self::Item> {
        let mut rng = self.rng.clone();
        let size = self.size;
        let data = population.as_ref();
        std::iter::repeat_with(move || {
            let mut buffer = Vec::new();
            resample_into(data, size, &mut rng, &mut buffer);
            Sample::new(buffer)
        })
    }
}
