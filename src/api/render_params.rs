use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Numeric inputs of one render.
///
/// Values are used as given: a zero step collapses segments to points,
/// negative values reverse direction, and non-finite values propagate into
/// the cursor as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Distance covered by `F` and `f`.
    pub step: f64,
    /// Degrees turned by `+` and `-`.
    pub delta: f64,
    pub start: Point,
    /// Initial heading in degrees; 90 faces up.
    pub heading: f64,
}

impl RenderParams {
    #[must_use]
    pub fn new(step: f64, delta: f64) -> Self {
        Self {
            step,
            delta,
            ..Self::default()
        }
    }

    /// Parameters of the bundled demonstration drawing.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(35.0, 90.0)
    }

    #[must_use]
    pub fn with_start(mut self, start: impl Into<Point>) -> Self {
        self.start = start.into();
        self
    }

    #[must_use]
    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            step: 30.0,
            delta: 90.0,
            start: Point::origin(),
            heading: 90.0,
        }
    }
}
