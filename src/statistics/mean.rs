use num_traits::{Float, FromPrimitive};

use super::Statistic;

/// Arithmetic mean. The sum is compensated (Kahan), so long columns of
/// repeated decimals do not drift.
///
/// An empty sample has no mean and yields NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

/// Compensated sum: `(sum, carried rounding error)`.
fn kahan_sum<T: Float>(values: &[T]) -> T {
    let (sum, _) = values.iter().fold((T::zero(), T::zero()), |(sum, carry), &x| {
        let y = x - carry;
        let next = sum + y;
        (next, (next - sum) - y)
    });
    sum
}

impl<D, T> Statistic<D, T> for Mean
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let values = data.as_ref();
        match T::from_usize(values.len()) {
            Some(n) if !values.is_empty() => kahan_sum(values) / n,
            _ => T::nan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn no_observations_no_mean() {
        let mean: f64 = Mean.compute(&[0.0_f64; 0]);
        assert!(mean.is_nan());
    }

    #[test]
    fn small_integer_samples() {
        assert_abs_diff_eq!(Mean.compute(&[2.0_f64, 4.0, 9.0]), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Mean.compute(&[-1.5_f32, 1.5]), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn compensated_sum_beats_naive_in_single_precision() {
        let column = vec![0.01_f32; 50_000];
        let naive = column.iter().sum::<f32>() / column.len() as f32;
        let mean: f32 = Mean.compute(&column);
        assert!((mean - 0.01).abs() <= (naive - 0.01).abs());
        assert_abs_diff_eq!(mean, 0.01, epsilon = 1e-6);
    }

    #[test]
    fn magnesium_mean() {
        let magnesium = crate::define_data().magnesium;
        assert_relative_eq!(Mean.compute(&magnesium), 60.05, epsilon = 1e-12);
    }
}
