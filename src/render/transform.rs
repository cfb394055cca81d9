use crate::core::{Point, Segment, Viewport};
use crate::error::{TurtleError, TurtleResult};

/// Maps turtle space onto canvas pixels.
///
/// Turtle space has its origin at the canvas center with y pointing up;
/// pixel space has its origin at the top-left corner with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    viewport: Viewport,
    scale: f64,
}

impl CanvasTransform {
    pub fn new(viewport: Viewport, scale: f64) -> TurtleResult<Self> {
        if !viewport.is_valid() {
            return Err(TurtleError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(TurtleError::InvalidData(
                "canvas scale must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { viewport, scale })
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn to_pixel(self, point: Point) -> (f64, f64) {
        let center_x = f64::from(self.viewport.width) / 2.0;
        let center_y = f64::from(self.viewport.height) / 2.0;
        (
            center_x + point.x * self.scale,
            center_y - point.y * self.scale,
        )
    }

    #[must_use]
    pub fn segment_to_pixels(self, segment: Segment) -> ((f64, f64), (f64, f64)) {
        (self.to_pixel(segment.from), self.to_pixel(segment.to))
    }
}
