//! Known-answer computations, one per capability.

use tracing::warn;

use super::Capability;
use crate::{
    proportion_interval, BetaBinomial, Fit, FitNormal, Kurtosis, MeanInterval, PercentileBootstrap,
    ProportionMethod, RankSumTest, Result, Sample, SeededRng, SignTest, Skewness, Statistic, TTest,
    VarianceInterval,
};
use rand::SeedableRng;

const PROBE: [f64; 6] = [1.0, 2.0, 2.0, 3.0, 4.0, 7.0];

pub(super) fn run(capability: Capability) -> bool {
    let outcome: Result<bool> = match capability {
        Capability::Moments => {
            let (skew, kurt): (f64, f64) =
                (Skewness::default(), Kurtosis::default()).compute(&PROBE);
            Ok(skew > 0.0 && kurt.is_finite())
        }
        Capability::DistributionFitting => FitNormal
            .fit(&PROBE)
            .map(|fitted| fitted.ks_test(&PROBE).p_value.is_finite()),
        Capability::DescriptiveInference => MeanInterval::new(0.95).map(|ci| {
            ci.compute(&PROBE).contains(&3.0) && TTest::new(3.0).compute(&PROBE).p_value > 0.5
        }),
        Capability::ProportionIntervals => {
            proportion_interval(3, 6, 0.95, ProportionMethod::Wilson).map(|ci| ci.contains(&0.5))
        }
        Capability::Nonparametric => {
            let sign = SignTest::new(0.0).compute(&PROBE);
            let rank = RankSumTest::default().compute(&(PROBE, PROBE));
            Ok(sign.p_value < 0.1 && rank.p_value > 0.9)
        }
        Capability::Estimation => {
            VarianceInterval::new(0.9).map(|ci| ci.compute(&PROBE).is_valid())
        }
        Capability::Bootstrap => PercentileBootstrap::new(crate::Mean, 50, 0.9).map(|boot| {
            let sample = Sample::from(&PROBE[..]);
            boot.interval(&sample, &mut SeededRng::seed_from_u64(0)).is_valid()
        }),
        Capability::Bayesian => BetaBinomial::uniform()
            .posterior(3, 6)
            .and_then(|post| post.credible_interval(0.9))
            .map(|ci| ci.contains(&0.5)),
    };

    match outcome {
        Ok(ok) => ok,
        Err(error) => {
            warn!(%capability, %error, "capability probe failed");
            false
        }
    }
}
