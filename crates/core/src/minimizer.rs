use std::{fmt, str::FromStr};

use thiserror::Error;

/// Scalar minimization method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Golden-section search.
    #[default]
    Golden,

    /// Brent's method: golden-section steps with parabolic interpolation.
    Brent,
}

/// Error returned when parsing an unknown [`Method`] name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported search method `{0}`, expected `golden` or `brent`")]
pub struct ParseMethodError(pub String);

impl Method {
    /// Returns the lowercase name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Golden => "golden",
            Self::Brent => "brent",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "golden" => Ok(Self::Golden),
            "brent" => Ok(Self::Brent),
            other => Err(ParseMethodError(other.to_owned())),
        }
    }
}

/// Settings passed to a [`ScalarMinimizer`] for one minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Convergence tolerance on the location of the minimum.
    pub tol: f64,

    /// Method used to refine the minimum.
    pub method: Method,

    /// Iteration budget.
    pub max_iter: usize,
}

/// Indicates how a solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a scalar minimization.
///
/// Running out of iterations is not a failure: `x` is always the minimizer's
/// best estimate, and `status` records whether it converged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// Best estimate of the argmin.
    pub x: f64,

    /// Final solver status.
    pub status: Status,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

/// A black-box minimizer of scalar objectives.
///
/// The objective is `FnMut` because evaluating it may mutate external state,
/// such as the parameters of a model under training. Minimizers evaluate it
/// one call at a time and never concurrently.
pub trait ScalarMinimizer {
    /// Minimizes `objective` and returns the best estimate found.
    fn minimize<F>(&self, objective: F, options: &Options) -> Minimum
    where
        F: FnMut(f64) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_methods() {
        assert_eq!("golden".parse::<Method>(), Ok(Method::Golden));
        assert_eq!("brent".parse::<Method>(), Ok(Method::Brent));
    }

    #[test]
    fn rejects_unsupported_method() {
        let err = "newton".parse::<Method>().unwrap_err();

        assert_eq!(err, ParseMethodError("newton".to_owned()));
        assert_eq!(
            err.to_string(),
            "unsupported search method `newton`, expected `golden` or `brent`"
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for method in [Method::Golden, Method::Brent] {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn golden_is_the_default() {
        assert_eq!(Method::default(), Method::Golden);
    }
}
