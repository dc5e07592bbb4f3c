//! Core traits and types for step-size line search.
//!
//! This crate defines the shared abstractions that the solvers and the
//! training orchestrator build on:
//!
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Sample`] — a totally ordered objective value with divergence mapped to `+inf`
//! - [`Trainable`] — the model being trained, as seen by a line search
//! - [`ScalarMinimizer`] — a black-box minimizer of `f64 -> f64` objectives

mod minimizer;
mod observer;
mod sample;
mod trainable;

pub use minimizer::{Method, Minimum, Options, ParseMethodError, ScalarMinimizer, Status};
pub use observer::Observer;
pub use sample::Sample;
pub use trainable::Trainable;
