//! Golden-section refinement of a step-size bracket.
//!
//! # Algorithm
//!
//! The bracket starts as `[0, maxstep]` with two interior points placed by the
//! golden ratio. Each iteration compares the objective at the interior points
//! and discards the part of the bracket beyond the worse one. The width shrinks
//! by `φ⁻¹ ≈ 0.618` per iteration, and one interior point always carries over,
//! so every iteration after the first costs a single evaluation.
//!
//! The search stops once the interior points are closer than the tolerance, or
//! after the iteration budget is spent. Running out of iterations is not an
//! error.
//!
//! [`refine`] returns the midpoint of the final bracket. [`search`] reports that
//! midpoint together with the lowest point it actually evaluated. The midpoint
//! is never sampled, so callers that must not land on a divergent step should
//! take [`Solution::x`].
//!
//! # Observer Events
//!
//! [`search`] emits one [`Event`] per iteration, after the bracket shrinks.
//! Observers can return [`Action::StopEarly`] to halt with the current bracket.

mod bracket;


pub use bracket::{Bracket, INV_PHI};

use linesearch_core::{Observer, Status};

/// Actions an observer can take during golden-section refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the refinement and report the current bracket.
    StopEarly,
}

/// Emitted after each bracket reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, starting at 1.
    pub iter: usize,

    /// Bracket after the reduction.
    pub bracket: Bracket,
}

/// Outcome of a golden-section [`search`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Lowest evaluated interior point.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Midpoint of the final bracket.
    pub midpoint: f64,

    /// Why the search stopped.
    pub status: Status,

    /// Completed iterations.
    pub iters: usize,
}

/// Returns the step in `[0, maxstep]` that approximately minimizes `f`.
///
/// This is the midpoint of the final bracket from [`search`] with a no-op
/// observer.
pub fn refine<F>(f: F, maxstep: f64, maxiter: usize, tol: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    search(f, maxstep, maxiter, tol, ()).midpoint
}

/// Runs golden-section search on `[0, maxstep]`.
///
/// The observer receives an [`Event`] after every bracket reduction.
/// See the [module docs](self) for details.
pub fn search<F, Obs>(
    mut f: F,
    maxstep: f64,
    maxiter: usize,
    tol: f64,
    mut observer: Obs,
) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let mut bracket = Bracket::new(maxstep);
    let mut f_left = f(bracket.inner_left());
    let mut f_right = f(bracket.inner_right());
    let mut best = if f_left <= f_right {
        (bracket.inner_left(), f_left)
    } else {
        (bracket.inner_right(), f_right)
    };

    for iter in 1..=maxiter {
        // The surviving interior point keeps its value; the other is stale
        // until evaluated below.
        let pending = if f_left < f_right {
            bracket.shrink_right();
            f_right = f_left;
            Pending::InnerLeft
        } else {
            bracket.shrink_left();
            f_left = f_right;
            Pending::InnerRight
        };

        if let Some(Action::StopEarly) = observer.observe(&Event { iter, bracket }) {
            return finish(bracket, best, Status::StoppedByObserver, iter);
        }

        if bracket.gap() < tol {
            return finish(bracket, best, Status::Converged, iter);
        }

        if iter == maxiter {
            break;
        }

        let sampled = match pending {
            Pending::InnerLeft => {
                f_left = f(bracket.inner_left());
                (bracket.inner_left(), f_left)
            }
            Pending::InnerRight => {
                f_right = f(bracket.inner_right());
                (bracket.inner_right(), f_right)
            }
        };
        if sampled.1 < best.1 || best.1.is_nan() {
            best = sampled;
        }
    }

    finish(bracket, best, Status::MaxIters, maxiter)
}

fn finish(bracket: Bracket, (x, objective): (f64, f64), status: Status, iters: usize) -> Solution {
    Solution {
        x,
        objective,
        midpoint: bracket.midpoint(),
        status,
        iters,
    }
}

/// Interior point that must be evaluated before the next comparison.
#[derive(Debug, Clone, Copy)]
enum Pending {
    InnerLeft,
    InnerRight,
}
