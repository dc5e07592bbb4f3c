/// The inverse golden ratio: φ⁻¹ = (√5 − 1) / 2.
pub const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Golden-section bracket.
///
/// Maintains the outer interval `[lower, upper]` and two interior points with
/// `lower ≤ inner_left ≤ inner_right ≤ upper`, positioned by the golden ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lower: f64,
    upper: f64,
    inner_left: f64,
    inner_right: f64,
}

impl Bracket {
    /// Creates the bracket `[0, upper]` with golden-ratio interior points.
    pub(super) fn new(upper: f64) -> Self {
        let lower = 0.0;
        let width = upper - lower;
        Self {
            lower,
            upper,
            inner_left: upper - INV_PHI * width,
            inner_right: lower + INV_PHI * width,
        }
    }

    /// Outer lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Outer upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Interior point at `upper − φ⁻¹ · width`.
    #[must_use]
    pub fn inner_left(&self) -> f64 {
        self.inner_left
    }

    /// Interior point at `lower + φ⁻¹ · width`.
    #[must_use]
    pub fn inner_right(&self) -> f64 {
        self.inner_right
    }

    /// Width of the outer interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Distance between the interior points.
    #[must_use]
    pub fn gap(&self) -> f64 {
        (self.inner_left - self.inner_right).abs()
    }

    /// Midpoint of the outer interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Keeps `[lower, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        let Self {
            lower,
            inner_left,
            inner_right,
            ..
        } = *self;
        self.upper = inner_right;
        self.inner_left = inner_right - INV_PHI * (inner_right - lower);
        self.inner_right = inner_left;
    }

    /// Keeps `[inner_left, upper]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        let Self {
            upper,
            inner_left,
            inner_right,
            ..
        } = *self;
        self.lower = inner_left;
        self.inner_left = inner_right;
        self.inner_right = inner_left + INV_PHI * (upper - inner_left);
    }
}
