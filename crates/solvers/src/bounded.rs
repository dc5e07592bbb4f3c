//! Bounded step minimization: interval location followed by golden-section
//! refinement.

use thiserror::Error;

use crate::{golden_section, interval};

/// Errors that can occur when validating bounded minimization settings.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The iteration budget is zero.
    #[error("parameter `maxiter` should be greater than zero")]
    MaxIter,

    /// The smallest step is zero, negative or not finite.
    #[error("parameter `minstep` should be a finite value greater than zero, got {0}")]
    MinStep(f64),

    /// The largest step is zero, negative or not finite.
    #[error("parameter `maxstep` should be a finite value greater than zero, got {0}")]
    MaxStep(f64),

    /// The tolerance is zero, negative or not finite.
    #[error("parameter `tol` should be a finite value greater than zero, got {0}")]
    Tol(f64),

    /// The smallest step is not below the largest.
    #[error("`minstep` ({minstep}) should be smaller than `maxstep` ({maxstep})")]
    StepOrder { minstep: f64, maxstep: f64 },
}

/// The range of step sizes explored by the interval locator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    minstep: f64,
    maxstep: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            minstep: 1e-5,
            maxstep: 50.0,
        }
    }
}

impl Bounds {
    /// Creates validated step bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not a finite positive value, or if
    /// `minstep` is not smaller than `maxstep`.
    pub fn new(minstep: f64, maxstep: f64) -> Result<Self, ConfigError> {
        check_step(minstep, ConfigError::MinStep)?;
        check_step(maxstep, ConfigError::MaxStep)?;
        check_order(minstep, maxstep)?;
        Ok(Self { minstep, maxstep })
    }

    /// Returns the first trial step.
    #[must_use]
    pub fn minstep(&self) -> f64 {
        self.minstep
    }

    /// Returns the largest step considered.
    #[must_use]
    pub fn maxstep(&self) -> f64 {
        self.maxstep
    }
}

/// Settings for [`minimize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    bounds: Bounds,
    maxiter: usize,
    tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            maxiter: 1024,
            tol: 1e-5,
        }
    }
}

impl Config {
    /// Creates validated settings.
    ///
    /// Parameters are checked in the order `maxiter`, `minstep`, `maxstep`,
    /// `tol`, and the first invalid one is reported.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first parameter that is not positive, or
    /// [`ConfigError::StepOrder`] if `minstep >= maxstep`.
    pub fn new(minstep: f64, maxstep: f64, maxiter: usize, tol: f64) -> Result<Self, ConfigError> {
        if maxiter == 0 {
            return Err(ConfigError::MaxIter);
        }
        check_step(minstep, ConfigError::MinStep)?;
        check_step(maxstep, ConfigError::MaxStep)?;
        check_step(tol, ConfigError::Tol)?;
        check_order(minstep, maxstep)?;

        Ok(Self {
            bounds: Bounds { minstep, maxstep },
            maxiter,
            tol,
        })
    }

    /// Returns the step bounds.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the iteration budget shared by both phases.
    #[must_use]
    pub fn maxiter(&self) -> usize {
        self.maxiter
    }

    /// Returns the golden-section tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

/// Minimizes `f` over step sizes using validated settings.
///
/// The interval locator first finds an upper bound between `minstep` and
/// `maxstep`, then golden-section search refines `[0, bound]`.
pub fn minimize<F>(mut f: F, config: &Config) -> f64
where
    F: FnMut(f64) -> f64,
{
    let Config {
        bounds,
        maxiter,
        tol,
    } = *config;

    let upper = interval::locate(&mut f, bounds.minstep, bounds.maxstep, maxiter);
    golden_section::refine(f, upper, maxiter, tol)
}

/// Minimizes `f` over step sizes.
///
/// Validates the settings with [`Config::new`], then runs [`minimize`].
///
/// # Errors
///
/// Returns a [`ConfigError`] before evaluating `f` if any setting is invalid.
pub fn fmin_golden_search<F>(
    f: F,
    minstep: f64,
    maxstep: f64,
    maxiter: usize,
    tol: f64,
) -> Result<f64, ConfigError>
where
    F: FnMut(f64) -> f64,
{
    let config = Config::new(minstep, maxstep, maxiter, tol)?;
    Ok(minimize(f, &config))
}

fn check_step(value: f64, error: fn(f64) -> ConfigError) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(error(value))
    }
}

fn check_order(minstep: f64, maxstep: f64) -> Result<(), ConfigError> {
    if minstep < maxstep {
        Ok(())
    } else {
        Err(ConfigError::StepOrder { minstep, maxstep })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn finds_shifted_quadratic_minimum() {
        let step = fmin_golden_search(|x| (x - 3.0).powi(2) + 1.0, 1e-5, 50.0, 1024, 1e-5)
            .expect("valid settings");

        assert_abs_diff_eq!(step, 3.0, epsilon = 1e-4);
    }

    #[test]
    fn default_config_matches_documented_values() {
        let config = Config::default();

        assert_eq!(config, Config::new(1e-5, 50.0, 1024, 1e-5).unwrap());
        assert_eq!(config.bounds(), Bounds::default());
    }

    #[test]
    fn minimum_beyond_maxstep_is_clamped() {
        let config = Config::new(0.1, 4.0, 1024, 1e-6).unwrap();
        let step = minimize(|x| (x - 100.0).powi(2), &config);

        assert_abs_diff_eq!(step, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn rejects_zero_maxiter() {
        let result = fmin_golden_search(|x| x, 1e-5, 50.0, 0, 1e-5);

        assert_eq!(result, Err(ConfigError::MaxIter));
    }

    #[test]
    fn rejects_zero_tol() {
        let result = fmin_golden_search(|x| x, 1e-5, 50.0, 1024, 0.0);

        assert_eq!(result, Err(ConfigError::Tol(0.0)));
    }

    #[test]
    fn rejects_unordered_steps() {
        let result = fmin_golden_search(|x| x, 5.0, 5.0, 1024, 1e-5);

        assert_eq!(
            result,
            Err(ConfigError::StepOrder {
                minstep: 5.0,
                maxstep: 5.0
            })
        );
    }

    #[test]
    fn reports_first_invalid_parameter() {
        let result = fmin_golden_search(|x| x, -1.0, -2.0, 0, 0.0);

        assert_eq!(result, Err(ConfigError::MaxIter));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            Bounds::new(f64::NAN, 1.0),
            Err(ConfigError::MinStep(_))
        ));
        assert_eq!(
            Bounds::new(1.0, f64::INFINITY),
            Err(ConfigError::MaxStep(f64::INFINITY))
        );
    }

    #[test]
    fn invalid_config_never_evaluates_objective() {
        let mut calls = 0;
        let result = fmin_golden_search(
            |x| {
                calls += 1;
                x
            },
            1.0,
            0.5,
            1024,
            1e-5,
        );

        assert!(result.is_err());
        assert_eq!(calls, 0);
    }

    #[test]
    fn error_messages_name_the_parameter() {
        assert_eq!(
            ConfigError::MaxIter.to_string(),
            "parameter `maxiter` should be greater than zero"
        );
        assert!(ConfigError::Tol(-1.0).to_string().contains("`tol`"));
        assert!(ConfigError::MinStep(0.0).to_string().contains("`minstep`"));
        assert!(ConfigError::MaxStep(0.0).to_string().contains("`maxstep`"));
    }

    proptest! {
        #[test]
        fn rejects_non_positive_minstep(minstep in -1e6_f64..=0.0) {
            prop_assert_eq!(
                Config::new(minstep, 50.0, 1024, 1e-5),
                Err(ConfigError::MinStep(minstep))
            );
        }

        #[test]
        fn rejects_non_positive_maxstep(maxstep in -1e6_f64..=0.0) {
            prop_assert_eq!(
                Config::new(1e-5, maxstep, 1024, 1e-5),
                Err(ConfigError::MaxStep(maxstep))
            );
        }

        #[test]
        fn rejects_non_positive_tol(tol in -1e6_f64..=0.0) {
            prop_assert_eq!(
                Config::new(1e-5, 50.0, 1024, tol),
                Err(ConfigError::Tol(tol))
            );
        }

        #[test]
        fn rejects_minstep_not_below_maxstep(maxstep in 1e-3_f64..1e3, excess in 0.0_f64..10.0) {
            let minstep = maxstep + excess;
            prop_assert_eq!(
                Config::new(minstep, maxstep, 1024, 1e-5),
                Err(ConfigError::StepOrder { minstep, maxstep })
            );
        }

        #[test]
        fn result_lies_within_zero_and_maxstep(center in 0.0_f64..100.0) {
            let step = fmin_golden_search(|x| (x - center).powi(2), 1e-5, 50.0, 1024, 1e-5).unwrap();
            prop_assert!((0.0..=50.0).contains(&step));
        }
    }
}
