//! Per-epoch learning-rate selection by line search.
//!
//! [`LineSearch::train_epoch`] chooses the step size for one training update
//! of a [`Trainable`](linesearch_core::Trainable) model:
//!
//! 1. Capture a [`Snapshot`] of the model's parameters and step.
//! 2. Score candidate steps with trial evaluations. Each trial restores the
//!    snapshot, applies one update at the candidate step, and measures the
//!    error. Non-finite errors score as `+inf`.
//! 3. Feed the trial function to a
//!    [`ScalarMinimizer`](linesearch_core::ScalarMinimizer) to pick the best
//!    step.
//! 4. Commit by running one last trial at the best step. Its result is the
//!    model state left behind.
//!
//! # Exclusive access
//!
//! The model is borrowed mutably for the whole call. Every trial mutates its
//! parameters, so callers must not assume the parameters are unchanged after
//! a line search.

mod config;
mod context;
mod error;
mod search;
mod snapshot;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use search::{Epoch, LineSearch};
pub use snapshot::Snapshot;

pub use linesearch_core::{Method, Status, Trainable};
