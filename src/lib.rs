//! Starting kit for an introductory statistical-inference course.
//!
//! A session runs three steps, in order:
//!
//! 1. [`load_libraries`] resolves the statistical capabilities the course uses
//!    (moments, distribution fitting, intervals, tests, bootstrap, Bayesian
//!    updates) and fails with [`Error::DependencyUnavailable`] if one is missing.
//! 2. [`setup_environment`] seeds the process-wide generator and returns the
//!    [`Environment`] holding the seed and the bootstrap replicate count.
//! 3. [`define_data`] returns the fixed [`CourseData`] teaching samples.
//!
//! ```no_run
//! use inferencia::*;
//!
//! load_libraries()?;
//! let env = setup_environment(&EnvironmentConfig::default())?;
//! let data = define_data();
//!
//! let boot = PercentileBootstrap::from_environment(Mean, &env, 0.95)?;
//! let ci = boot.interval(&data.magnesium, &mut env.rng());
//! println!("{ci}");
//! # Ok::<(), inferencia::Error>(())
//! ```

mod error;
mod capability;
mod environment;
mod data;

mod sample;
mod statistics;
mod resample;
mod hypothesis;
mod estimation;
mod fit;
mod bayes;
mod display;

pub use crate::error::{Error, Result};
pub use crate::capability::{load_libraries, Builtin, Capability, Loader, Resolver};
pub use crate::environment::*;
pub use crate::data::{define_data, keys, ColumnKind, ColumnRef, CourseData, SugarCategory, LAYOUT};
pub use crate::sample::Sample;
pub use crate::statistics::*;
pub use crate::resample::*;
pub use crate::hypothesis::*;
pub use crate::estimation::*;
pub use crate::fit::{Fit, FitExponential, FitNormal, Fitted};
pub use crate::bayes::{BetaBinomial, BetaPosterior, NormalMean, NormalPosterior};
pub use rand;
