//! Brent's method for bounded scalar minimization.
//!
//! Combines golden-section steps with parabolic interpolation through the
//! three best points seen so far. Parabolic steps are taken only when they
//! land well inside the current interval and shrink faster than the step
//! before last; otherwise a golden-section step is used. On smooth objectives
//! this converges superlinearly, and it never does worse than golden section
//! by more than a constant factor.
//!
//! Unlike [`golden_section`](crate::golden_section), the result is the best
//! point evaluated rather than the midpoint of the final interval.

use linesearch_core::{Minimum, Status};

use crate::golden_section::INV_PHI;

/// Fraction of the interval used for golden-section steps: 1 − φ⁻¹.
const GOLDEN_STEP: f64 = 1.0 - INV_PHI;

/// Returns the point in `bracket` that approximately minimizes `f`.
///
/// `tol` is the absolute tolerance on the location of the minimum; a small
/// relative term proportional to `√ε · |x|` is added internally so the
/// tolerance never drops below what `f64` can resolve. At most `maxiter`
/// evaluations follow the initial one. If the budget runs out, the best point
/// found so far is returned with [`Status::MaxIters`].
///
/// The bracket bounds may be given in either order.
pub fn refine<F>(mut f: F, bracket: [f64; 2], maxiter: usize, tol: f64) -> Minimum
where
    F: FnMut(f64) -> f64,
{
    let sqrt_eps = f64::EPSILON.sqrt();

    let [lo, hi] = bracket;
    let (mut a, mut b) = if lo <= hi { (lo, hi) } else { (hi, lo) };

    // x: best point, w: second best, v: previous value of w.
    let mut x = a + GOLDEN_STEP * (b - a);
    let mut fx = f(x);
    let (mut w, mut fw) = (x, fx);
    let (mut v, mut fv) = (x, fx);

    // d: current step, e: step before last.
    let mut d: f64 = 0.0;
    let mut e: f64 = 0.0;

    for iter in 0..=maxiter {
        let xm = 0.5 * (a + b);
        let tol1 = sqrt_eps * x.abs() + tol / 3.0;
        let tol2 = 2.0 * tol1;

        if (x - xm).abs() <= tol2 - 0.5 * (b - a) {
            return Minimum {
                x,
                status: Status::Converged,
                iters: iter,
            };
        }
        if iter == maxiter {
            break;
        }

        let mut golden = true;
        if e.abs() > tol1 {
            let r = (x - w) * (fx - fv);
            let q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            let mut q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();

            let e_prev = e;
            e = d;

            if p.abs() < (0.5 * q * e_prev).abs() && p > q * (a - x) && p < q * (b - x) {
                golden = false;
                d = p / q;
                let u = x + d;
                // Never evaluate too close to either bound.
                if u - a < tol2 || b - u < tol2 {
                    d = tol1.copysign(xm - x);
                }
            }
        }
        if golden {
            e = if x >= xm { a - x } else { b - x };
            d = GOLDEN_STEP * e;
        }

        // Never evaluate closer than tol1 to x.
        let u = x + d.abs().max(tol1).copysign(d);
        let fu = f(u);

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            (v, fv) = (w, fw);
            (w, fw) = (x, fx);
            (x, fx) = (u, fu);
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                (v, fv) = (w, fw);
                (w, fw) = (u, fu);
            } else if fu <= fv || v == x || v == w {
                (v, fv) = (u, fu);
            }
        }
    }

    Minimum {
        x,
        status: Status::MaxIters,
        iters: maxiter,
    }
}
