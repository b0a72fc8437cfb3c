use std::fmt;

use num_traits::Float;

/// Range of plausible values for a parameter: a confidence, credible or
/// percentile interval, optionally carrying the point estimate and its level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    /// Lower bound.
    pub lower: T,
    /// Upper bound.
    pub upper: T,
    /// Point estimate, if attached.
    pub estimate: Option<T>,
    /// Nominal level, if attached.
    pub confidence: Option<f64>,
}

impl<T: Float> Interval<T> {
    /// Bare `[lower, upper]`, no estimate or level attached.
    pub const fn new(lower: T, upper: T) -> Self {
        Self { lower, upper, estimate: None, confidence: None }
    }

    /// `estimate ± margin`, with the estimate attached.
    pub fn around(estimate: T, margin: T) -> Self {
        Self::new(estimate - margin, estimate + margin).with_estimate(estimate)
    }

    /// Both bounds NaN: what degenerate samples produce.
    pub fn nan() -> Self {
        Self::new(T::nan(), T::nan())
    }

    /// Attach a point estimate.
    #[must_use]
    pub fn with_estimate(self, estimate: T) -> Self {
        Self { estimate: Some(estimate), ..self }
    }

    /// Attach a confidence level.
    #[must_use]
    pub fn with_confidence(self, confidence: f64) -> Self {
        Self { confidence: Some(confidence), ..self }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, value: &T) -> bool {
        (self.lower..=self.upper).contains(value)
    }

    /// `upper - lower`.
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// Halfway between the bounds.
    pub fn midpoint(&self) -> T {
        self.lower + self.width() / (T::one() + T::one())
    }

    /// Estimate if attached, midpoint otherwise.
    fn centre(&self) -> T {
        self.estimate.unwrap_or_else(|| self.midpoint())
    }

    /// Larger distance from the centre to either bound.
    fn margin(&self) -> T {
        let centre = self.centre();
        (centre - self.lower).max(self.upper - centre)
    }

    /// Bounds ordered and not NaN, estimate within them, level in (0, 1).
    pub fn is_valid(&self) -> bool {
        let ordered = self.lower <= self.upper;
        let estimate_inside = self.estimate.is_none_or(|e| self.contains(&e));
        let level_ok = self.confidence.is_none_or(|c| c > 0.0 && c < 1.0);
        ordered && estimate_inside && level_ok
    }

    /// Whether both halves agree in length within `rel_tol` of the longer one.
    pub fn is_symmetric(&self, rel_tol: T) -> bool {
        let left = self.centre() - self.lower;
        let right = self.upper - self.centre();
        (left - right).abs() <= rel_tol * left.abs().max(right.abs())
    }

    /// Render with the given notation.
    pub fn format(&self, style: IntervalStyle) -> FormattedInterval<'_, T> {
        FormattedInterval { interval: self, style }
    }
}

/// Notation used when rendering an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalStyle {
    /// `[4.39, 5.35]`
    Bounds,
    /// `4.87 ± 0.48`, falling back to bounds when the interval is lopsided.
    Symmetric,
    /// `4.87 ∈ [4.39, 5.35] with 0.95`; the level is omitted when unknown.
    #[default]
    Set,
}

/// [`Interval`] paired with an [`IntervalStyle`], ready for `{}`.
pub struct FormattedInterval<'a, T> {
    interval: &'a Interval<T>,
    style: IntervalStyle,
}

/// Decimals that keep two significant digits of `margin`.
fn decimals(margin: f64) -> usize {
    if margin.is_finite() && margin > 0.0 {
        (1.0 - margin.log10().floor()).max(0.0) as usize
    } else {
        4
    }
}

impl<T: Float + fmt::Display> fmt::Display for FormattedInterval<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ci = self.interval;
        let (centre, margin) = (ci.centre(), ci.margin());
        let places = decimals(margin.to_f64().unwrap_or(f64::NAN));
        let num = |x: T| match x.to_f64() {
            Some(v) if v.is_finite() => format!("{v:.places$}"),
            _ => x.to_string(),
        };
        let bounds = format!("[{}, {}]", num(ci.lower), num(ci.upper));

        match self.style {
            IntervalStyle::Symmetric if ci.is_symmetric(T::from(0.05).unwrap_or_else(T::zero)) => {
                write!(f, "{} ± {}", num(centre), num(margin))
            }
            IntervalStyle::Bounds | IntervalStyle::Symmetric => f.write_str(&bounds),
            IntervalStyle::Set => match ci.confidence {
                Some(level) => write!(f, "{} ∈ {bounds} with {level:.2}", num(centre)),
                None => write!(f, "{} ∈ {bounds}", num(centre)),
            },
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format(IntervalStyle::default()).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_interval_has_expected_bounds() {
        let ci = Interval::around(10.0_f64, 2.0).with_confidence(0.95);
        assert_eq!((ci.lower, ci.upper), (8.0, 12.0));
        assert_eq!(ci.width(), 4.0);
        assert!(ci.contains(&11.5));
        assert!(ci.contains(&12.0));
        assert!(ci.is_valid());
        assert!(ci.is_symmetric(1e-12));
    }

    #[test]
    fn reversed_or_nan_bounds_are_invalid() {
        assert!(!Interval::new(3.0_f64, 1.0).is_valid());
        assert!(!Interval::<f64>::nan().is_valid());
        assert!(!Interval::new(0.0_f64, 1.0).with_estimate(2.0).is_valid());
        assert!(!Interval::new(0.0_f64, 1.0).with_confidence(1.0).is_valid());
    }

    #[test]
    fn formats_with_two_significant_digits_of_margin() {
        let ci = Interval::around(4.8712_f64, 0.4831).with_confidence(0.95);
        assert_eq!(ci.format(IntervalStyle::Symmetric).to_string(), "4.87 ± 0.48");
        assert_eq!(ci.format(IntervalStyle::Bounds).to_string(), "[4.39, 5.35]");
        assert_eq!(ci.to_string(), "4.87 ∈ [4.39, 5.35] with 0.95");
    }

    #[test]
    fn lopsided_interval_falls_back_to_bounds() {
        let ci = Interval::new(902.49_f64, 3328.9).with_estimate(1560.47);
        assert_eq!(ci.format(IntervalStyle::Symmetric).to_string(), "[902, 3329]");
        assert_eq!(ci.to_string(), "1560 ∈ [902, 3329]");
    }
}
