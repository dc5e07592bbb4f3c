use linesearch_core::{Sample, Trainable};
use tracing::{debug, warn};

use crate::Snapshot;

/// Everything a trial evaluation needs: the model, its snapshot, and the batch.
///
/// Trials are serialized through `&mut self`, and each one starts from the
/// snapshot, so no trial observes another's update.
pub(crate) struct TrialContext<'a, T>
where
    T: Trainable + ?Sized,
{
    model: &'a mut T,
    snapshot: &'a Snapshot<T::Params>,
    input: &'a T::Input,
    target: &'a T::Target,
    trials: usize,
    failure: Option<(f64, T::Error)>,
}

impl<'a, T> TrialContext<'a, T>
where
    T: Trainable + ?Sized,
{
    pub(crate) fn new(
        model: &'a mut T,
        snapshot: &'a Snapshot<T::Params>,
        input: &'a T::Input,
        target: &'a T::Target,
    ) -> Self {
        Self {
            model,
            snapshot,
            input,
            target,
            trials: 0,
            failure: None,
        }
    }

    /// Restores the snapshot, applies one update at `step`, and measures the error.
    pub(crate) fn evaluate(&mut self, step: f64) -> Result<Sample, T::Error> {
        self.model.set_parameters(&self.snapshot.params);
        self.model.set_step(step);
        self.model.train_epoch(self.input, self.target)?;
        let error = self.model.prediction_error(self.input, self.target)?;
        Ok(Sample::new(error))
    }

    /// Scores `step` for the minimizer.
    ///
    /// After the first model failure, the failure is kept and every later
    /// trial scores `+inf` without touching the model.
    pub(crate) fn trial(&mut self, step: f64) -> f64 {
        if self.failure.is_some() {
            return f64::INFINITY;
        }

        self.trials += 1;
        match self.evaluate(step) {
            Ok(sample) => {
                debug!(
                    trial = self.trials,
                    step,
                    error = sample.value(),
                    divergent = sample.is_divergent(),
                    "line search trial"
                );
                sample.value()
            }
            Err(error) => {
                warn!(trial = self.trials, step, %error, "model failed during line search trial");
                self.failure = Some((step, error));
                f64::INFINITY
            }
        }
    }

    /// Number of trials that reached the model.
    pub(crate) fn trials(&self) -> usize {
        self.trials
    }

    /// Takes the recorded failure, if any, with the step that caused it.
    pub(crate) fn take_failure(&mut self) -> Option<(f64, T::Error)> {
        self.failure.take()
    }

    /// Puts the model back into its snapshot state.
    pub(crate) fn restore(&mut self) {
        self.snapshot.restore(&mut *self.model);
    }
}
