//! Locates an upper bound for the step that minimizes an objective.
//!
//! Starting from `minstep`, the trial step doubles while the objective does
//! not get worse. The first step at which the objective increases has
//! overshot the minimum, so the minimum lies in `[0, step]`.

/// Returns an upper bound for the location of the minimum of `f`.
///
/// The step starts at `minstep` and doubles (capped at `maxstep`) after every
/// evaluation that is no worse than the previous one. The search stops as
/// soon as the objective increases, or once `maxstep` itself has been
/// evaluated without an increase, and never evaluates `f` more than `maxiter`
/// times.
///
/// A NaN objective counts as an increase.
///
/// If the objective never increases, `maxstep` is returned.
pub fn locate<F>(mut f: F, minstep: f64, maxstep: f64, maxiter: usize) -> f64
where
    F: FnMut(f64) -> f64,
{
    let mut prev = f64::INFINITY;
    let mut step = minstep;

    for _ in 0..maxiter {
        let current = f(step);

        if current.is_nan() || current > prev {
            break;
        }
        if step >= maxstep {
            break;
        }

        step = (2.0 * step).min(maxstep);
        prev = current;
    }

    step
}
