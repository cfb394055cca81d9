use crate::core::{Command, Point, Segment};

/// Wraps `degrees` into `[0, 360)`.
///
/// Non-finite input yields NaN.
#[must_use]
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Turtle state: position plus heading in degrees (0 = east, counter-clockwise).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub position: Point,
    pub heading: f64,
}

impl Cursor {
    #[must_use]
    pub fn new(position: Point, heading: f64) -> Self {
        Self {
            position,
            heading: normalize_heading(heading),
        }
    }

    /// Returns the cursor moved `step` units along its heading.
    #[must_use]
    pub fn advanced(self, step: f64) -> Self {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        Self {
            position: Point::new(
                self.position.x + step * cos,
                self.position.y + step * sin,
            ),
            heading: self.heading,
        }
    }

    /// Returns the cursor rotated by `delta` degrees.
    #[must_use]
    pub fn turned(self, delta: f64) -> Self {
        Self {
            position: self.position,
            heading: normalize_heading(self.heading + delta),
        }
    }

    /// Applies one command and reports the segment it draws, if any.
    ///
    /// `Push` and `Pop` need the interpreter's save stack and leave the cursor
    /// untouched here.
    #[must_use]
    pub fn apply(self, command: Command, step: f64, delta: f64) -> (Self, Option<Segment>) {
        match command {
            Command::Forward => {
                let next = self.advanced(step);
                (next, Some(Segment::new(self.position, next.position)))
            }
            Command::Move => (self.advanced(step), None),
            Command::TurnLeft => (self.turned(delta), None),
            Command::TurnRight => (self.turned(-delta), None),
            Command::Push | Command::Pop => (self, None),
        }
    }
}
