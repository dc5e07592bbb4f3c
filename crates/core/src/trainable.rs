/// A model whose parameters are updated by a step-size driven training rule.
///
/// A line search treats the model as an exclusively borrowed resource: it
/// captures the parameters and step once, then repeatedly restores them, runs a
/// single update at a trial step, and measures the resulting error.
///
/// Implementations must make [`Trainable::set_parameters`] restore the model
/// exactly, so that two updates started from the same parameters and step
/// produce the same result.
pub trait Trainable {
    /// Values of every trainable parameter.
    type Params: Clone;

    /// Batch of inputs passed to a training update.
    type Input: ?Sized;

    /// Batch of targets passed to a training update.
    type Target: ?Sized;

    /// Failure raised by a training update or an error measurement.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the current values of all trainable parameters.
    fn parameters(&self) -> Self::Params;

    /// Overwrites all trainable parameters.
    fn set_parameters(&mut self, params: &Self::Params);

    /// Returns the step size used by the next update.
    fn step(&self) -> f64;

    /// Sets the step size used by the next update.
    fn set_step(&mut self, step: f64);

    /// Applies one training update using the current step size.
    ///
    /// # Errors
    ///
    /// Returns an error if the update cannot be computed.
    fn train_epoch(&mut self, input: &Self::Input, target: &Self::Target)
    -> Result<(), Self::Error>;

    /// Measures the error of the model on a batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the error cannot be computed.
    fn prediction_error(&self, input: &Self::Input, target: &Self::Target)
    -> Result<f64, Self::Error>;
}
