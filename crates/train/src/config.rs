use linesearch_core::{Method, Options, ParseMethodError};
use linesearch_solvers::{Bounds, bounded};
use thiserror::Error;

/// Configuration for the line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
    maxiter: usize,
    method: Method,
    bounds: Bounds,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("tol must be finite and greater than zero, got {0}")]
    Tol(f64),

    #[error("maxiter must be at least 1")]
    MaxIter,

    #[error(transparent)]
    Method(#[from] ParseMethodError),

    #[error("invalid step bounds: {0}")]
    Bounds(#[from] bounded::ConfigError),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 0.1,
            maxiter: 1024,
            method: Method::Golden,
            bounds: Bounds::default(),
        }
    }
}

impl Config {
    /// Creates a config with validated settings and default step bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not a finite positive value or `maxiter`
    /// is zero.
    pub fn new(tol: f64, maxiter: usize, method: Method) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol(tol));
        }
        if maxiter == 0 {
            return Err(ConfigError::MaxIter);
        }

        Ok(Self {
            tol,
            maxiter,
            method,
            bounds: Bounds::default(),
        })
    }

    /// Creates a config, parsing the search method from its name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Method`] if `method` is neither `"golden"` nor
    /// `"brent"`, or any error from [`Config::new`].
    pub fn parse(tol: f64, maxiter: usize, method: &str) -> Result<Self, ConfigError> {
        Self::new(tol, maxiter, method.parse()?)
    }

    /// Returns a copy of the config exploring steps in `[minstep, maxstep]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Bounds`] if the bounds are invalid.
    pub fn with_step_bounds(self, minstep: f64, maxstep: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            bounds: Bounds::new(minstep, maxstep)?,
            ..self
        })
    }

    /// Returns the tolerance on the selected step.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the iteration budget.
    #[must_use]
    pub fn maxiter(&self) -> usize {
        self.maxiter
    }

    /// Returns the search method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the step bounds.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the options handed to the scalar minimizer.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            tol: self.tol,
            method: self.method,
            max_iter: self.maxiter,
        }
    }
}
