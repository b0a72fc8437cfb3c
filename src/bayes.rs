//! Conjugate Bayesian estimation.
//!
//! - [`BetaBinomial`]: Beta prior on a proportion, binomial likelihood.
//! - [`NormalMean`]: normal prior on a mean, normal likelihood with known σ.
//!
//! Posterior summaries are closed-form; [`BetaPosterior::draws`] samples from
//! the posterior with a caller-supplied (seeded) generator.

use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::{Beta, ContinuousCDF, Normal};

use crate::error::check_confidence;
use crate::{Error, Interval, Mean, Result, Sample, Statistic};

/// Beta(α, β) prior for a success probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaBinomial {
    /// Prior pseudo-successes.
    pub alpha: f64,
    /// Prior pseudo-failures.
    pub beta: f64,
}

impl BetaBinomial {
    /// Fails unless both shapes are positive and finite.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if alpha > 0.0 && beta > 0.0 && alpha.is_finite() && beta.is_finite() {
            Ok(Self { alpha, beta })
        } else {
            Err(Error::InvalidParameter(format!(
                "beta prior needs positive finite shapes, got ({alpha}, {beta})"
            )))
        }
    }

    /// Flat prior, Beta(1, 1).
    pub fn uniform() -> Self {
        Self { alpha: 1.0, beta: 1.0 }
    }

    /// Jeffreys prior, Beta(½, ½).
    pub fn jeffreys() -> Self {
        Self { alpha: 0.5, beta: 0.5 }
    }

    /// Beta(α + k, β + n - k) after `successes` out of `trials`.
    pub fn posterior(&self, successes: u64, trials: u64) -> Result<BetaPosterior> {
        if successes > trials {
            return Err(Error::InvalidParameter(format!(
                "successes ({successes}) exceed trials ({trials})"
            )));
        }
        Ok(BetaPosterior {
            alpha: self.alpha + successes as f64,
            beta: self.beta + (trials - successes) as f64,
        })
    }

    /// Posterior for the share of observations equal to `target`.
    pub fn update<T: PartialEq>(&self, data: &[T], target: &T) -> Result<BetaPosterior> {
        let hits = data.iter().filter(|x| *x == target).count();
        self.posterior(hits as u64, data.len() as u64)
    }
}

/// Beta(α, β) posterior of a proportion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaPosterior {
    /// Posterior shape α.
    pub alpha: f64,
    /// Posterior shape β.
    pub beta: f64,
}

impl BetaPosterior {
    fn distribution(&self) -> Result<Beta> {
        Beta::new(self.alpha, self.beta).map_err(|e| Error::InvalidParameter(e.to_string()))
    }

    /// Posterior mean `α / (α + β)`.
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Posterior variance.
    pub fn variance(&self) -> f64 {
        let total = self.alpha + self.beta;
        self.alpha * self.beta / (total * total * (total + 1.0))
    }

    /// Equal-tailed credible interval holding `level` of the posterior mass.
    pub fn credible_interval(&self, level: f64) -> Result<Interval<f64>> {
        let level = check_confidence(level)?;
        let dist = self.distribution()?;
        let tail = (1.0 - level) / 2.0;
        Ok(Interval::new(dist.inverse_cdf(tail), dist.inverse_cdf(1.0 - tail))
            .with_estimate(self.mean())
            .with_confidence(level))
    }

    /// Posterior probability that the proportion exceeds `threshold`.
    pub fn prob_greater(&self, threshold: f64) -> Result<f64> {
        Ok(self.distribution()?.sf(threshold))
    }

    /// `n` independent posterior draws.
    pub fn draws<R: Rng>(&self, rng: &mut R, n: usize) -> Result<Sample<f64>> {
        let dist = self.distribution()?;
        Ok((0..n).map(|_| dist.sample(rng)).collect())
    }
}

/// Normal prior `N(μ₀, τ₀²)` on a population mean, with the population
/// standard deviation σ treated as known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalMean {
    /// Prior mean μ₀.
    pub prior_mean: f64,
    /// Prior standard deviation τ₀.
    pub prior_sd: f64,
    /// Population standard deviation σ, assumed known.
    pub known_sd: f64,
}

impl NormalMean {
    /// Fails unless both standard deviations are positive.
    pub fn new(prior_mean: f64, prior_sd: f64, known_sd: f64) -> Result<Self> {
        if !(prior_sd > 0.0 && known_sd > 0.0) || !prior_mean.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "normal prior needs finite mean and positive sds, \
                 got ({prior_mean}, {prior_sd}, {known_sd})"
            )));
        }
        Ok(Self { prior_mean, prior_sd, known_sd })
    }

    /// Precision-weighted update: `1/τₙ² = 1/τ₀² + n/σ²`,
    /// `μₙ = τₙ² (μ₀/τ₀² + n·x̄/σ²)`. An empty sample returns the prior.
    pub fn posterior(&self, data: &[f64]) -> NormalPosterior {
        let prior_precision = self.prior_sd.powi(-2);
        if data.is_empty() {
            return NormalPosterior { mean: self.prior_mean, sd: self.prior_sd };
        }
        let n = data.len() as f64;
        let data_precision = n / (self.known_sd * self.known_sd);
        let xbar: f64 = Mean.compute(&data);

        let precision = prior_precision + data_precision;
        NormalPosterior {
            mean: (self.prior_mean * prior_precision + xbar * data_precision) / precision,
            sd: precision.recip().sqrt(),
        }
    }
}

/// `N(mean, sd²)` posterior of a population mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalPosterior {
    /// Posterior mean.
    pub mean: f64,
    /// Posterior standard deviation.
    pub sd: f64,
}

impl NormalPosterior {
    /// Central interval holding `level` of the posterior mass.
    pub fn credible_interval(&self, level: f64) -> Result<Interval<f64>> {
        let level = check_confidence(level)?;
        let dist = Normal::new(self.mean, self.sd)
            .map_err(|e| Error::InvalidParameter(e.to_string()))?;
        let tail = (1.0 - level) / 2.0;
        Ok(Interval::new(dist.inverse_cdf(tail), dist.inverse_cdf(1.0 - tail))
            .with_estimate(self.mean)
            .with_confidence(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{define_data, SeededRng, SugarCategory};
    use approx::assert_relative_eq;
    use rand::SeedableRng;

    #[test]
    fn s1_share_with_flat_prior() {
        let sugar = define_data().sample1_sugar;
        let post = BetaBinomial::uniform().update(sugar.as_ref(), &SugarCategory::S1).unwrap();
        assert_eq!(post, BetaPosterior { alpha: 13.0, beta: 9.0 });
        assert_relative_eq!(post.mean(), 13.0 / 22.0);

        let ci = post.credible_interval(0.95).unwrap();
        assert_relative_eq!(ci.lower, 0.3843543903786457, max_relative = 1e-5);
        assert_relative_eq!(ci.upper, 0.7818031431148698, max_relative = 1e-5);
        let above_half = post.prob_greater(0.5).unwrap();
        assert_relative_eq!(above_half, 0.8083448410034175, max_relative = 1e-6);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let post = BetaPosterior { alpha: 13.0, beta: 9.0 };
        let a = post.draws(&mut SeededRng::seed_from_u64(2023), 20_000).unwrap();
        let b = post.draws(&mut SeededRng::seed_from_u64(2023), 20_000).unwrap();
        assert_eq!(a, b);
        let mean: f64 = Mean.compute(&a);
        assert!((mean - post.mean()).abs() < 0.01);
        assert!(a.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn normal_mean_for_magnesium() {
        let magnesium = define_data().magnesium;
        let post = NormalMean::new(50.0, 20.0, 40.0).unwrap().posterior(magnesium.as_ref());
        assert_relative_eq!(post.mean, 58.375, max_relative = 1e-12);
        assert_relative_eq!(post.sd, (1.0_f64 / 0.015).sqrt(), max_relative = 1e-12);
        let ci = post.credible_interval(0.95).unwrap();
        assert!(ci.is_symmetric(1e-6));
        assert!(ci.contains(&60.05));
    }

    #[test]
    fn invalid_priors_and_counts() {
        assert!(BetaBinomial::new(0.0, 1.0).is_err());
        assert!(BetaBinomial::jeffreys().posterior(5, 4).is_err());
        assert!(NormalMean::new(0.0, -1.0, 1.0).is_err());
        let prior = NormalMean::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(prior.posterior(&[]), NormalPosterior { mean: 1.0, sd: 2.0 });
    }
}
