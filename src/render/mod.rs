mod null_surface;
mod primitives;
mod recording_surface;
mod transform;

pub use null_surface::NullSurface;
pub use primitives::{Color, StrokeStyle};
pub use recording_surface::RecordingSurface;
pub use transform::CanvasTransform;

use crate::core::Segment;
use crate::error::TurtleResult;

/// Contract implemented by anything the interpreter can draw on.
///
/// A render calls `begin` once, `draw_segment` once per pen-down step in
/// command order, then `present` once. Segments are not replayed, so a
/// surface that needs to repaint must keep them itself.
pub trait DrawingSurface {
    fn begin(&mut self, style: &StrokeStyle) -> TurtleResult<()>;

    fn draw_segment(&mut self, segment: Segment) -> TurtleResult<()>;

    fn present(&mut self) -> TurtleResult<()>;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn begin(&mut self, style: &StrokeStyle) -> TurtleResult<()> {
        (**self).begin(style)
    }

    fn draw_segment(&mut self, segment: Segment) -> TurtleResult<()> {
        (**self).draw_segment(segment)
    }

    fn present(&mut self) -> TurtleResult<()> {
        (**self).present()
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
#[cfg(feature = "gtk4-adapter")]
pub(crate) use cairo_backend::{paint_background, stroke_segment};
