use crate::statistics::Statistic;

/// Share of observations equal to `target`.
///
/// Works for any comparable label, e.g. the `S1` indicator on a sugar sample.
#[derive(Debug, Clone, Copy)]
pub struct Proportion<T> {
    /// Value counted as a success.
    pub target: T,
}

impl<T> Proportion<T> {
    /// Share of observations equal to `target`.
    pub fn of(target: T) -> Self {
        Self { target }
    }
}

impl<D, T> Statistic<D, f64> for Proportion<T>
where
    D: AsRef<[T]>,
    T: PartialEq,
{
    fn compute(&self, data: &D) -> f64 {
        let slice = data.as_ref();
        if slice.is_empty() {
            return f64::NAN;
        }
        let hits = slice.iter().filter(|x| **x == self.target).count();
        hits as f64 / slice.len() as f64
    }
}
