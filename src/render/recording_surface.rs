use crate::core::Segment;
use crate::error::TurtleResult;
use crate::render::{DrawingSurface, StrokeStyle};

/// Surface that keeps every segment it receives, in draw order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSurface {
    segments: Vec<Segment>,
    style: Option<StrokeStyle>,
    presented: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Style passed to the last `begin`, if a render has started.
    #[must_use]
    pub fn style(&self) -> Option<StrokeStyle> {
        self.style
    }

    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.presented
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin(&mut self, style: &StrokeStyle) -> TurtleResult<()> {
        self.segments.clear();
        self.style = Some(*style);
        self.presented = false;
        Ok(())
    }

    fn draw_segment(&mut self, segment: Segment) -> TurtleResult<()> {
        self.segments.push(segment);
        Ok(())
    }

    fn present(&mut self) -> TurtleResult<()> {
        self.presented = true;
        Ok(())
    }
}
