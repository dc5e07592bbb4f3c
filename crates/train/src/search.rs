use linesearch_core::{ScalarMinimizer, Status, Trainable};
use linesearch_solvers::LineMinimizer;
use tracing::info;

use crate::{Config, Error, Snapshot, context::TrialContext};

/// Outcome of one line-search training epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epoch {
    /// Step size committed to the model.
    pub step: f64,

    /// Error measured after the committed update, `+inf` if it diverged.
    pub error: f64,

    /// Trial evaluations run while searching, not counting the commit.
    pub trials: usize,

    /// How the minimizer finished.
    pub status: Status,
}

/// Chooses the step size of each training epoch by minimizing the error
/// along the update direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearch<M = LineMinimizer> {
    config: Config,
    minimizer: M,
}

impl Default for LineSearch {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl LineSearch {
    /// Creates a line search that uses [`LineMinimizer`] over the config's
    /// step bounds.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            minimizer: LineMinimizer::new(config.bounds()),
            config,
        }
    }
}

impl<M: ScalarMinimizer> LineSearch<M> {
    /// Creates a line search that delegates step selection to `minimizer`.
    pub fn with_minimizer(config: Config, minimizer: M) -> Self {
        Self { config, minimizer }
    }

    /// Returns the config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Selects a step size for one epoch and commits the update.
    ///
    /// On success the model holds the parameters produced by exactly one
    /// update at [`Epoch::step`], applied to the parameters it had on entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Model`] if the model fails to update or to measure its
    /// error. The model is restored to its entry state before returning.
    pub fn train_epoch<T>(
        &self,
        model: &mut T,
        input: &T::Input,
        target: &T::Target,
    ) -> Result<Epoch, Error>
    where
        T: Trainable + ?Sized,
    {
        let snapshot = Snapshot::capture(&*model);
        let mut ctx = TrialContext::new(model, &snapshot, input, target);

        let minimum = self
            .minimizer
            .minimize(|step| ctx.trial(step), &self.config.options());

        if let Some((step, source)) = ctx.take_failure() {
            ctx.restore();
            return Err(Error::model(step, source));
        }

        let trials = ctx.trials();
        let sample = match ctx.evaluate(minimum.x) {
            Ok(sample) => sample,
            Err(source) => {
                ctx.restore();
                return Err(Error::model(minimum.x, source));
            }
        };

        info!(
            step = minimum.x,
            error = sample.value(),
            trials,
            status = ?minimum.status,
            "committed line search step"
        );

        Ok(Epoch {
            step: minimum.x,
            error: sample.value(),
            trials,
            status: minimum.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use linesearch_core::{Minimum, Options};

    /// Model with a single parameter `w`; an update moves it to `w + step`
    /// and the error is `(w - 0.5)²`.
    #[derive(Debug, Default)]
    struct Scalar {
        w: f64,
        step: f64,
    }

    impl Trainable for Scalar {
        type Params = f64;
        type Input = ();
        type Target = ();
        type Error = Infallible;

        fn parameters(&self) -> f64 {
            self.w
        }

        fn set_parameters(&mut self, params: &f64) {
            self.w = *params;
        }

        fn step(&self) -> f64 {
            self.step
        }

        fn set_step(&mut self, step: f64) {
            self.step = step;
        }

        fn train_epoch(&mut self, _: &(), _: &()) -> Result<(), Infallible> {
            self.w += self.step;
            Ok(())
        }

        fn prediction_error(&self, _: &(), _: &()) -> Result<f64, Infallible> {
            Ok((self.w - 0.5).powi(2))
        }
    }

    /// Minimizer that always picks the same step after trying a few others.
    struct Fixed(f64);

    impl ScalarMinimizer for Fixed {
        fn minimize<F>(&self, mut objective: F, _options: &Options) -> Minimum
        where
            F: FnMut(f64) -> f64,
        {
            for step in [0.1, 5.0, 0.3] {
                objective(step);
            }
            Minimum {
                x: self.0,
                status: Status::Converged,
                iters: 3,
            }
        }
    }

    #[test]
    fn commits_step_chosen_by_minimizer() {
        let search = LineSearch::with_minimizer(Config::default(), Fixed(0.25));
        let mut model = Scalar::default();

        let epoch = search.train_epoch(&mut model, &(), &()).unwrap();

        assert_eq!(epoch.trials, 3);
        assert_relative_eq!(epoch.step, 0.25);
        assert_relative_eq!(model.step, 0.25);
        // One update from w = 0, regardless of the trials.
        assert_relative_eq!(model.w, 0.25);
        assert_relative_eq!(epoch.error, 0.0625);
    }

    #[test]
    fn default_search_finds_error_minimum() {
        let config = Config::new(1e-4, 1024, crate::Method::Golden).unwrap();
        let mut model = Scalar::default();

        let epoch = LineSearch::new(config)
            .train_epoch(&mut model, &(), &())
            .unwrap();

        assert!((0.4..=0.6).contains(&epoch.step), "step = {}", epoch.step);
        assert_relative_eq!(model.w, epoch.step);
    }
}
