use std::cmp::Ordering;

/// An objective value measured at a trial step.
///
/// Non-finite measurements (NaN from a diverged update, or an overflow to
/// either infinity) are stored as `+inf`, so a divergent step compares worse
/// than every finite one and never wins a search.
///
/// Samples are totally ordered through [`f64::total_cmp`].
#[derive(Debug, Clone, Copy)]
pub struct Sample(f64);

impl Sample {
    /// Creates a sample, mapping non-finite values to `+inf`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value)
        } else {
            Self(f64::INFINITY)
        }
    }

    /// Returns the canonical objective value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if the measurement was not finite.
    #[must_use]
    pub fn is_divergent(self) -> bool {
        self.0 == f64::INFINITY
    }
}

impl From<f64> for Sample {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Sample> for f64 {
    fn from(sample: Sample) -> Self {
        sample.0
    }
}

impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Sample {}

impl PartialOrd for Sample {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sample {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
