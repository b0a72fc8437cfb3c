use crate::error::check_confidence;
use crate::{Error, Interval, Result, Statistic};

use super::normal_critical;

/// How a proportion interval is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProportionMethod {
    /// `p̂ ± z·√(p̂(1-p̂)/n)`, clamped to `[0, 1]`.
    Wald,
    /// Score interval; keeps sensible coverage for small `n` and extreme `p̂`.
    #[default]
    Wilson,
}

/// Confidence interval for the share of `successes` among `trials`.
pub fn proportion_interval(
    successes: u64,
    trials: u64,
    confidence: f64,
    method: ProportionMethod,
) -> Result<Interval<f64>> {
    let confidence = check_confidence(confidence)?;
    if trials == 0 || successes > trials {
        return Err(Error::InvalidParameter(format!(
            "need 0 <= successes <= trials and trials > 0, got {successes}/{trials}"
        )));
    }

    let n = trials as f64;
    let p = successes as f64 / n;
    let z = normal_critical(confidence);

    let (lower, upper) = match method {
        ProportionMethod::Wald => {
            let half = z * (p * (1.0 - p) / n).sqrt();
            (p - half, p + half)
        }
        ProportionMethod::Wilson => {
            let z2 = z * z;
            let denom = 1.0 + z2 / n;
            let centre = (p + z2 / (2.0 * n)) / denom;
            let half = z / denom * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt();
            (centre - half, centre + half)
        }
    };

    Ok(Interval::new(lower.max(0.0), upper.min(1.0))
        .with_estimate(p)
        .with_confidence(confidence))
}

/// Confidence interval for the share of observations equal to `target`.
#[derive(Debug, Clone, Copy)]
pub struct ProportionInterval<T> {
    /// Category counted as a success.
    pub target: T,
    /// Interval construction.
    pub method: ProportionMethod,
    confidence: f64,
}

impl<T> ProportionInterval<T> {
    /// Wilson interval for `target` at `confidence`.
    pub fn new(target: T, confidence: f64) -> Result<Self> {
        Ok(Self {
            target,
            method: ProportionMethod::default(),
            confidence: check_confidence(confidence)?,
        })
    }

    /// Switch the construction.
    #[must_use]
    pub fn method(mut self, method: ProportionMethod) -> Self {
        self.method = method;
        self
    }
}

impl<D, T> Statistic<D, Interval<f64>> for ProportionInterval<T>
where
    D: AsRef<[T]>,
    T: PartialEq,
{
    fn compute(&self, data: &D) -> Interval<f64> {
        let slice = data.as_ref();
        let hits = slice.iter().filter(|x| **x == self.target).count();
        proportion_interval(hits as u64, slice.len() as u64, self.confidence, self.method)
            .unwrap_or_else(|_| Interval::nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SugarCategory;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn wald_and_wilson_for_s1_share() {
        let sugar = crate::define_data().sample1_sugar;

        let wald = ProportionInterval::new(SugarCategory::S1, 0.95)
            .unwrap()
            .method(ProportionMethod::Wald)
            .compute(&sugar);
        assert_relative_eq!(wald.lower, 0.3852967027539412, max_relative = 1e-8);
        assert_relative_eq!(wald.upper, 0.8147032972460588, max_relative = 1e-8);

        let wilson = ProportionInterval::new(SugarCategory::S1, 0.95).unwrap().compute(&sugar);
        assert_relative_eq!(wilson.lower, 0.38658150076225317, max_relative = 1e-8);
        assert_relative_eq!(wilson.upper, 0.7811934676271829, max_relative = 1e-8);
        assert_eq!(wilson.estimate, Some(0.6));
    }

    #[test]
    fn wilson_stays_informative_at_zero_successes() {
        let ci = proportion_interval(0, 20, 0.95, ProportionMethod::Wilson).unwrap();
        assert_abs_diff_eq!(ci.lower, 0.0, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 0.1611251580528193, max_relative = 1e-8);

        let wald = proportion_interval(0, 20, 0.95, ProportionMethod::Wald).unwrap();
        assert_eq!(wald.width(), 0.0);
    }

    #[test]
    fn rejects_impossible_counts() {
        assert!(proportion_interval(3, 2, 0.95, ProportionMethod::Wilson).is_err());
        assert!(proportion_interval(0, 0, 0.95, ProportionMethod::Wald).is_err());
        assert!(ProportionInterval::new(SugarCategory::S2, 1.5).is_err());
    }
}
