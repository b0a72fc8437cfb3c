//! Maximum-likelihood distribution fitting.

use statrs::distribution::{Continuous, ContinuousCDF, Exp, Normal};

use crate::{Error, KsTest, Mean, Result, Statistic, TestResult, Variance};

/// A fitted distribution together with its goodness of fit.
#[derive(Debug, Clone, Copy)]
pub struct Fitted<Dist> {
    /// The fitted distribution.
    pub distribution: Dist,
    /// Log-likelihood of the data under `distribution`.
    pub log_likelihood: f64,
    /// Number of estimated parameters.
    pub parameters: usize,
}

impl<Dist> Fitted<Dist> {
    /// Akaike information criterion, `2k - 2 ln L`. Lower is better.
    pub fn aic(&self) -> f64 {
        2.0 * self.parameters as f64 - 2.0 * self.log_likelihood
    }

    /// Kolmogorov–Smirnov test of `data` against the fitted distribution.
    pub fn ks_test<D: AsRef<[f64]>>(&self, data: &D) -> TestResult
    where
        Dist: ContinuousCDF<f64, f64> + Clone,
    {
        KsTest::against(self.distribution.clone()).compute(data)
    }
}

/// A family of distributions that can be fitted to a sample.
pub trait Fit {
    /// Fitted distribution type.
    type Distribution;

    /// Maximum-likelihood fit of `data`.
    fn fit(&self, data: &[f64]) -> Result<Fitted<Self::Distribution>>;
}

fn log_likelihood<Dist: Continuous<f64, f64>>(dist: &Dist, data: &[f64]) -> f64 {
    data.iter().map(|&x| dist.ln_pdf(x)).sum()
}

/// Normal family: `μ̂ = x̄`, `σ̂² = Σ(x - x̄)²/n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitNormal;

impl Fit for FitNormal {
    type Distribution = Normal;

    fn fit(&self, data: &[f64]) -> Result<Fitted<Normal>> {
        let mean: f64 = Mean.compute(&data);
        let sd = Variance::new(0).compute(&data).sqrt();
        let distribution = Normal::new(mean, sd)
            .map_err(|e| {
                Error::InvalidParameter(format!("normal fit (μ = {mean}, σ = {sd}): {e}"))
            })?;
        Ok(Fitted {
            log_likelihood: log_likelihood(&distribution, data),
            distribution,
            parameters: 2,
        })
    }
}

/// Exponential family: `λ̂ = 1/x̄`. Requires non-negative data with a positive mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitExponential;

impl Fit for FitExponential {
    type Distribution = Exp;

    fn fit(&self, data: &[f64]) -> Result<Fitted<Exp>> {
        if data.iter().any(|x| *x < 0.0) {
            return Err(Error::InvalidParameter("exponential fit needs non-negative data".into()));
        }
        let mean: f64 = Mean.compute(&data);
        if !(mean > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "exponential fit needs a positive mean, got {mean}"
            )));
        }
        let distribution = Exp::new(1.0 / mean)
            .map_err(|e| Error::InvalidParameter(format!("exponential fit (x̄ = {mean}): {e}")))?;
        Ok(Fitted {
            log_likelihood: log_likelihood(&distribution, data),
            distribution,
            parameters: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_data;
    use approx::assert_relative_eq;
    use statrs::statistics::Distribution;

    #[test]
    fn normal_fit_to_magnesium() {
        let magnesium = define_data().magnesium;
        let fitted = FitNormal.fit(magnesium.as_ref()).unwrap();
        assert_relative_eq!(fitted.distribution.mean().unwrap(), 60.05, max_relative = 1e-12);
        let sd = fitted.distribution.std_dev().unwrap();
        assert_relative_eq!(sd, 38.502564849630474, max_relative = 1e-12);
        assert_relative_eq!(fitted.log_likelihood, -101.39326783500708, max_relative = 1e-10);
        assert!(fitted.ks_test(&magnesium).p_value > 0.05);
    }

    #[test]
    fn exponential_beats_normal_for_vitamin_b12() {
        let b12 = define_data().vitamin_b12;
        let exp = FitExponential.fit(b12.as_ref()).unwrap();
        let normal = FitNormal.fit(b12.as_ref()).unwrap();
        assert_relative_eq!(exp.distribution.rate(), 0.6040471156750227, max_relative = 1e-12);
        assert_relative_eq!(exp.log_likelihood, -30.082061560103277, max_relative = 1e-10);
        assert_relative_eq!(normal.log_likelihood, -34.9171399980796, max_relative = 1e-10);
        assert!(exp.aic() < normal.aic());
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert!(FitNormal.fit(&[3.0, 3.0, 3.0]).is_err());
        assert!(FitExponential.fit(&[-1.0, 2.0]).is_err());
        assert!(FitExponential.fit(&[0.0, 0.0]).is_err());
    }
}
