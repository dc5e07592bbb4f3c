use linesearch_core::{Method, Minimum, Options, ScalarMinimizer};

use crate::{Bounds, brent, golden_section, interval};

/// Step-size minimizer built from the solvers in this crate.
///
/// Every minimization first runs the [interval locator](interval::locate)
/// between the configured step bounds to find an upper bound for the minimum,
/// then refines `[0, bound]` with the requested [`Method`]. Both phases share
/// the iteration budget from [`Options::max_iter`].
///
/// The returned step is always one the objective was evaluated at, so a step
/// scored as divergent is only chosen when nothing better was seen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineMinimizer {
    bounds: Bounds,
}

impl LineMinimizer {
    /// Creates a minimizer that explores steps within `bounds`.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Returns the step bounds.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl ScalarMinimizer for LineMinimizer {
    fn minimize<F>(&self, mut objective: F, options: &Options) -> Minimum
    where
        F: FnMut(f64) -> f64,
    {
        let upper = interval::locate(
            &mut objective,
            self.bounds.minstep(),
            self.bounds.maxstep(),
            options.max_iter,
        );

        match options.method {
            Method::Golden => {
                let solution =
                    golden_section::search(objective, upper, options.max_iter, options.tol, ());
                Minimum {
                    x: solution.x,
                    status: solution.status,
                    iters: solution.iters,
                }
            }
            Method::Brent => brent::refine(objective, [0.0, upper], options.max_iter, options.tol),
        }
    }
}
