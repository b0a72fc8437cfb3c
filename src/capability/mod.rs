//! Declared statistical capabilities and their resolution.
//!
//! The course needs a fixed list of facilities (moments, fitting, intervals,
//! tests, bootstrap, Bayesian updates). The list is data: [`Capability::ALL`].
//! A [`Resolver`] decides whether each one is available, and a [`Loader`]
//! resolves the whole list once.

mod probe;

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info};

use crate::{Error, Result};

/// A statistical facility required by the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Skewness and kurtosis.
    Moments,
    /// Maximum-likelihood fits and goodness of fit.
    DistributionFitting,
    /// Descriptive statistics, mean intervals and t-tests.
    DescriptiveInference,
    /// Wald and Wilson intervals for a share.
    ProportionIntervals,
    /// Sign and rank-sum tests.
    Nonparametric,
    /// Point and interval estimation.
    Estimation,
    /// Resampling and percentile intervals.
    Bootstrap,
    /// Conjugate posterior updates.
    Bayesian,
}

impl Capability {
    /// Every capability, in load order.
    pub const ALL: [Capability; 8] = [
        Self::Moments,
        Self::DistributionFitting,
        Self::DescriptiveInference,
        Self::ProportionIntervals,
        Self::Nonparametric,
        Self::Estimation,
        Self::Bootstrap,
        Self::Bayesian,
    ];

    /// Stable lowercase name, used in errors and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Moments => "moments",
            Self::DistributionFitting => "distribution-fitting",
            Self::DescriptiveInference => "descriptive-inference",
            Self::ProportionIntervals => "proportion-intervals",
            Self::Nonparametric => "nonparametric",
            Self::Estimation => "estimation",
            Self::Bootstrap => "bootstrap",
            Self::Bayesian => "bayesian",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decides whether a capability can be used.
pub trait Resolver {
    /// `true` when `capability` can be used.
    fn resolve(&self, capability: Capability) -> bool;
}

impl<F: Fn(Capability) -> bool> Resolver for F {
    fn resolve(&self, capability: Capability) -> bool {
        self(capability)
    }
}

/// Resolves capabilities against this crate's own implementations by running
/// a small known-answer computation through each one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Builtin;

impl Resolver for Builtin {
    fn resolve(&self, capability: Capability) -> bool {
        probe::run(capability)
    }
}

/// Resolves the declared capability list once.
#[derive(Debug)]
pub struct Loader<R> {
    resolver: R,
    loaded: BTreeSet<Capability>,
}

impl<R: Resolver> Loader<R> {
    /// Loader with nothing resolved yet.
    pub fn new(resolver: R) -> Self {
        Self { resolver, loaded: BTreeSet::new() }
    }

    /// Resolves every capability in [`Capability::ALL`] order.
    ///
    /// Stops at the first unavailable capability with
    /// [`Error::DependencyUnavailable`]; nothing is marked loaded in that case.
    /// Calling again after a successful load does nothing.
    pub fn load(&mut self) -> Result<()> {
        if self.is_loaded() {
            debug!("capabilities already loaded");
            return Ok(());
        }

        for capability in Capability::ALL {
            if !self.resolver.resolve(capability) {
                return Err(Error::DependencyUnavailable { name: capability.name() });
            }
        }

        self.loaded.extend(Capability::ALL);
        info!(count = self.loaded.len(), "statistical capabilities loaded");
        Ok(())
    }

    /// Whether every capability has been resolved.
    pub fn is_loaded(&self) -> bool {
        self.loaded.len() == Capability::ALL.len()
    }

    /// Resolved capabilities in declaration order.
    pub fn loaded(&self) -> impl Iterator<Item = Capability> + '_ {
        self.loaded.iter().copied()
    }
}

static GLOBAL_LOADER: Mutex<Option<Loader<Builtin>>> = Mutex::new(None);

/// Resolves every capability with [`Builtin`] for the whole process.
/// Idempotent: later calls return immediately once a load has succeeded.
pub fn load_libraries() -> Result<()> {
    let mut guard = GLOBAL_LOADER.lock().unwrap_or_else(PoisonError::into_inner);
    guard.get_or_insert_with(|| Loader::new(Builtin)).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn builtin_resolves_everything() {
        for capability in Capability::ALL {
            assert!(Builtin.resolve(capability), "{capability}");
        }
    }

    #[test]
    fn load_libraries_is_idempotent() {
        load_libraries().unwrap();
        load_libraries().unwrap();
    }

    #[test]
    fn missing_capability_is_reported_by_name() {
        let mut loader = Loader::new(|c: Capability| c != Capability::Bayesian);
        let err = loader.load().unwrap_err();
        assert!(matches!(err, Error::DependencyUnavailable { name: "bayesian" }));
        assert!(!loader.is_loaded());
        assert_eq!(loader.loaded().count(), 0);
    }

    #[test]
    fn second_load_does_not_resolve_again() {
        let calls = Cell::new(0);
        let mut loader = Loader::new(|_: Capability| {
            calls.set(calls.get() + 1);
            true
        });
        loader.load().unwrap();
        loader.load().unwrap();
        assert_eq!(calls.get(), Capability::ALL.len());
        assert_eq!(loader.loaded().collect::<Vec<_>>(), Capability::ALL.to_vec());
    }

    #[test]
    fn names_are_unique() {
        let names: BTreeSet<_> = Capability::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Capability::ALL.len());
    }
}
