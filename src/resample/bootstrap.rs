use rand::Rng;
use crate::Sample;
use super::Re;

/// Nonparametric bootstrap: each resample draws `n` observations with
/// replacement from a sample of size `n`.
///
/// The generator is cloned on every call to [`Re::re`], so two calls yield the
/// same stream.
#[derive(Clone, Copy, Default)]
pub struct Bootstrap<R: Rng> {
    /// Generator, cloned on every call to [`Re::re`].
    pub rng: R,
}

impl<R: Rng> Bootstrap<R> {
    /// Bootstrap driven by `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<T: Copy, R: Rng + Clone> Re<Sample<T>> for Bootstrap<R> {
    type Item = Sample<T>;

    fn re(&self, sample: &Sample<T>) -> impl Iterator<Item = Self::Item> {
        BootstrapIter { data: &sample.data, rng: self.rng.clone() }
    }
}

/// Fills `buffer` with `size` draws (with replacement) from `data`.
/// An empty `data` leaves `buffer` empty.
pub fn resample_into<T: Copy, R: Rng>(data: &[T], size: usize, rng: &mut R, buffer: &mut Vec<T>) {
    buffer.clear();
    if data.is_empty() {
        return;
    }
    buffer.reserve_exact(size);
    let n = data.len();
    buffer.extend((0..size).map(|_| data[rng.gen_range(0..n)]));
}

/// Infinite iterator returned by [`Bootstrap`].
pub struct BootstrapIter<'a, T, R: Rng> {
    data: &'a [T],
    rng: R,
}

impl<T: Copy, R: Rng> Iterator for BootstrapIter<'_, T, R> {
    type Item = Sample<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buffer = Vec::new();
        resample_into(self.data, self.data.len(), &mut self.rng, &mut buffer);
        Some(Sample::new(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeededRng;
    use rand::SeedableRng;

    #[test]
    fn resamples_keep_size_and_support() {
        let sample = Sample::new(vec![1, 2, 3, 4, 5]);
        let boot = Bootstrap::new(SeededRng::seed_from_u64(7));
        for resample in boot.re(&sample).take(50) {
            assert_eq!(resample.len(), 5);
            assert!(resample.iter().all(|x| sample.data.contains(x)));
        }
    }

    #[test]
    fn stream_is_reproducible() {
        let sample = Sample::new(vec![0.5, 1.5, 2.5]);
        let boot = Bootstrap::new(SeededRng::seed_from_u64(3));
        let a: Vec<_> = boot.re(&sample).take(5).collect();
        let b: Vec<_> = boot.re(&sample).take(5).collect();
        assert_eq!(a, b);
    }
}
