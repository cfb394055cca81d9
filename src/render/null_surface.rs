use crate::core::Segment;
use crate::error::TurtleResult;
use crate::render::{DrawingSurface, StrokeStyle};

/// No-op surface used by tests and headless runs.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub segment_count: usize,
    pub presented: bool,
}

impl DrawingSurface for NullSurface {
    fn begin(&mut self, _style: &StrokeStyle) -> TurtleResult<()> {
        self.segment_count = 0;
        self.presented = false;
        Ok(())
    }

    fn draw_segment(&mut self, _segment: Segment) -> TurtleResult<()> {
        self.segment_count += 1;
        Ok(())
    }

    fn present(&mut self) -> TurtleResult<()> {
        self.presented = true;
        Ok(())
    }
}
