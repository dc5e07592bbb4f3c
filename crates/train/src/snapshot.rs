use linesearch_core::Trainable;

/// Parameter values and step size captured before a line search.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<P> {
    /// Values of every trainable parameter.
    pub params: P,

    /// Step size in effect when the snapshot was taken.
    pub step: f64,
}

impl<P: Clone> Snapshot<P> {
    /// Captures the current state of `model`.
    pub fn capture<T>(model: &T) -> Self
    where
        T: Trainable<Params = P> + ?Sized,
    {
        Self {
            params: model.parameters(),
            step: model.step(),
        }
    }

    /// Restores `model` to the captured parameters and step.
    pub fn restore<T>(&self, model: &mut T)
    where
        T: Trainable<Params = P> + ?Sized,
    {
        model.set_parameters(&self.params);
        model.set_step(self.step);
    }
}
