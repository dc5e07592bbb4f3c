use std::error::Error as StdError;

use thiserror::Error;

use crate::ConfigError;

/// Errors that can occur during a line search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config")]
    InvalidConfig(#[from] ConfigError),

    #[error("model failed during a trial update at step {step}")]
    Model {
        step: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn model<E>(step: f64, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Model {
            step,
            source: Box::new(source),
        }
    }
}
