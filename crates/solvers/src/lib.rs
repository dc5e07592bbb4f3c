//! Derivative-free scalar minimizers for choosing a step size.
//!
//! The objective is a function of the step length along a fixed descent
//! direction. Only steps in `[0, maxstep]` are considered.
//!
//! # Solvers
//!
//! - [`interval`] — expands a trial step until the objective stops improving,
//!   giving an upper bound for the minimum
//! - [`golden_section`] — shrinks `[0, bound]` by the golden ratio until it is
//!   narrower than a tolerance
//! - [`brent`] — golden-section steps accelerated by parabolic interpolation
//! - [`bounded`] — validated composition of [`interval`] and [`golden_section`]
//!
//! [`LineMinimizer`] wires these together behind the
//! [`ScalarMinimizer`](linesearch_core::ScalarMinimizer) interface.

pub mod bounded;
pub mod brent;
pub mod golden_section;
pub mod interval;

mod minimizer;

pub use bounded::{Bounds, ConfigError, fmin_golden_search};
pub use minimizer::LineMinimizer;
