//! Seeded randomness and bootstrap settings for a course session.
//!
//! [`setup_environment`] validates an [`EnvironmentConfig`], reseeds the
//! process-wide generator and hands back an [`Environment`] that later
//! analyses read their replicate count and generator handles from.

mod config;

use std::sync::{Mutex, PoisonError};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{info, warn};

pub use config::{
    EnvironmentConfig, DEFAULT_BOOTSTRAP_REPLICATES, DEFAULT_SEED, ENV_BOOTSTRAP_REPLICATES,
    ENV_SEED,
};

use crate::Result;

/// Generator used throughout the crate. Its stream for a given seed does not
/// change between platforms or releases.
pub type SeededRng = Xoshiro256PlusPlus;

static GLOBAL_RNG: Mutex<Option<SeededRng>> = Mutex::new(None);

/// Validated session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    seed: u64,
    bootstrap_replicate_count: usize,
}

impl Environment {
    /// Configured seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Resamples per bootstrap run.
    pub fn bootstrap_replicate_count(&self) -> usize {
        self.bootstrap_replicate_count
    }

    /// Fresh generator seeded from the configured seed. Every call starts the
    /// same stream.
    pub fn rng(&self) -> SeededRng {
        SeededRng::seed_from_u64(self.seed)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED as u64,
            bootstrap_replicate_count: DEFAULT_BOOTSTRAP_REPLICATES as usize,
        }
    }
}

/// Validates `config`, reseeds the process-wide generator and returns the
/// resulting [`Environment`].
///
/// The global generator is shared by the whole process: callers on several
/// threads must serialise configure-then-use themselves.
pub fn setup_environment(config: &EnvironmentConfig) -> Result<Environment> {
    let env = config.validate()?;
    *GLOBAL_RNG.lock().unwrap_or_else(PoisonError::into_inner) = Some(env.rng());
    info!(
        seed = env.seed,
        bootstrap_replicates = env.bootstrap_replicate_count,
        "environment configured"
    );
    Ok(env)
}

/// Runs `f` against the process-wide generator.
///
/// If [`setup_environment`] has not run yet, the generator is seeded with
/// [`DEFAULT_SEED`] first.
pub fn with_global_rng<T>(f: impl FnOnce(&mut SeededRng) -> T) -> T {
    let mut guard = GLOBAL_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    let rng = guard.get_or_insert_with(|| {
        warn!(
            seed = DEFAULT_SEED,
            "global generator used before setup_environment; seeding with default"
        );
        Environment::default().rng()
    });
    f(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_stream() {
        let env = EnvironmentConfig::default().validate().unwrap();
        let a: Vec<u32> = env.rng().sample_iter(rand::distributions::Standard).take(8).collect();
        let b: Vec<u32> = env.rng().sample_iter(rand::distributions::Standard).take(8).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn default_seed_stream_is_pinned() {
        // Stable across runs, platforms and rand_xoshiro releases.
        let mut rng = Environment::default().rng();
        assert_eq!(rand::RngCore::next_u64(&mut rng), 17_877_924_213_317_811_824);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = EnvironmentConfig { seed: 1, ..Default::default() }.validate().unwrap();
        let b = EnvironmentConfig { seed: 2, ..Default::default() }.validate().unwrap();
        assert_ne!(a.rng().gen_range(0..u64::MAX), b.rng().gen_range(0..u64::MAX));
    }

    #[test]
    fn replicate_count_is_exposed() {
        let env = EnvironmentConfig { bootstrap_replicate_count: 250, ..Default::default() }
            .validate()
            .unwrap();
        assert_eq!(env.bootstrap_replicate_count(), 250);
        assert_eq!(env.seed(), 2023);
        assert_eq!(Environment::default(), EnvironmentConfig::default().validate().unwrap());
    }
}
