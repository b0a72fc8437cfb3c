use std::ops::Index;

use crate::statistics::Statistic;

/// Ordered, immutable collection of observations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample<T> {
    /// Observations, in order.
    pub data: Vec<T>,
}

impl<T> Sample<T> {
    /// Wrap `data` without copying.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Observations by reference.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Estimate a statistic from the sample data
    pub fn estimate<Output>(&self, statistic: &impl Statistic<Self, Output>) -> Output {
        statistic.compute(self)
    }
}

impl<T: Clone> From<&[T]> for Sample<T> {
    fn from(slice: &[T]) -> Self {
        Self::new(slice.to_vec())
    }
}

impl<T> FromIterator<T> for Sample<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sample::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sample<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T> Index<usize> for Sample<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> AsRef<[T]> for Sample<T> {
    fn as_ref(&self) -> &[T] { &self.data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mean;

    #[test]
    fn estimate_delegates_to_statistic() {
        let sample: Sample<f64> = [2.0, 4.0, 6.0].into_iter().collect();
        assert_eq!(sample.estimate(&Mean), 4.0);
        assert_eq!(sample[1], 4.0);
        assert_eq!(sample.len(), 3);
    }
}
