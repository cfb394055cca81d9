use std::fs::File;
use std::path::{Path, PathBuf};

use cairo::{Context, Format, ImageSurface, LineCap};
use tracing::debug;

use crate::core::{Segment, Viewport};
use crate::error::{TurtleError, TurtleResult};
use crate::render::{CanvasTransform, Color, DrawingSurface, StrokeStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub segments_drawn: usize,
}

/// Offscreen cairo surface.
///
/// Segments are stroked onto an ARGB32 image as they arrive. `present`
/// flushes the image and, when an output path is set, writes it as PNG.
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    transform: CanvasTransform,
    context: Option<Context>,
    style: StrokeStyle,
    output_path: Option<PathBuf>,
    stats: CairoRenderStats,
}

impl CairoSurface {
    pub fn new(viewport: Viewport, scale: f64) -> TurtleResult<Self> {
        let transform = CanvasTransform::new(viewport, scale)?;
        let width = i32::try_from(viewport.width).map_err(|_| TurtleError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })?;
        let height = i32::try_from(viewport.height).map_err(|_| TurtleError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            transform,
            context: None,
            style: StrokeStyle::default(),
            output_path: None,
            stats: CairoRenderStats::default(),
        })
    }

    /// Writes a PNG to `path` on every `present`.
    #[must_use]
    pub fn with_png_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    #[must_use]
    pub fn image(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.stats
    }

    pub fn write_png(&self, path: &Path) -> TurtleResult<()> {
        let mut file = File::create(path)?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| TurtleError::Surface(format!("failed to write png: {err}")))
    }

    fn context(&self) -> TurtleResult<&Context> {
        self.context
            .as_ref()
            .ok_or_else(|| TurtleError::Surface("cairo surface used before begin".to_owned()))
    }
}

impl DrawingSurface for CairoSurface {
    fn begin(&mut self, style: &StrokeStyle) -> TurtleResult<()> {
        style.validate()?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        paint_background(&context, style.background)?;

        self.style = *style;
        self.context = Some(context);
        self.stats = CairoRenderStats::default();
        Ok(())
    }

    fn draw_segment(&mut self, segment: Segment) -> TurtleResult<()> {
        stroke_segment(self.context()?, self.transform, &self.style, segment)?;
        self.stats.segments_drawn += 1;
        Ok(())
    }

    fn present(&mut self) -> TurtleResult<()> {
        self.context = None;
        self.surface.flush();
        if let Some(path) = &self.output_path {
            self.write_png(path)?;
            debug!(path = %path.display(), "wrote png");
        }
        Ok(())
    }
}

pub(crate) fn paint_background(context: &Context, color: Color) -> TurtleResult<()> {
    apply_color(context, color);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to clear surface", err))
}

pub(crate) fn stroke_segment(
    context: &Context,
    transform: CanvasTransform,
    style: &StrokeStyle,
    segment: Segment,
) -> TurtleResult<()> {
    let ((x1, y1), (x2, y2)) = transform.segment_to_pixels(segment);
    apply_color(context, style.color);
    context.set_line_width(style.width);
    context.set_line_cap(LineCap::Round);
    context.move_to(x1, y1);
    context.line_to(x2, y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke segment", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TurtleError {
    TurtleError::Surface(format!("{prefix}: {err}"))
}
