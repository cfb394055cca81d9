use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{debug, warn};

use crate::core::{Segment, Viewport};
use crate::error::{TurtleError, TurtleResult};
use crate::render::{
    CanvasTransform, DrawingSurface, StrokeStyle, paint_background, stroke_segment,
};

const APPLICATION_ID: &str = "rs.turtle.render";

/// Drawing surface backed by a GTK4 window.
///
/// A window has to repaint on demand, so the segments of the current render
/// are kept as its display list. `present` opens the window and blocks until
/// the user closes it.
pub struct GtkWindowSurface {
    title: String,
    transform: CanvasTransform,
    style: StrokeStyle,
    segments: Vec<Segment>,
}

impl GtkWindowSurface {
    /// Connects to the display. Fails when no display is available.
    pub fn new(title: impl Into<String>, viewport: Viewport, scale: f64) -> TurtleResult<Self> {
        let transform = CanvasTransform::new(viewport, scale)?;
        gtk::init()
            .map_err(|err| TurtleError::Surface(format!("failed to initialize gtk: {err}")))?;
        Ok(Self {
            title: title.into(),
            transform,
            style: StrokeStyle::default(),
            segments: Vec::new(),
        })
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Snapshot of one render handed to the window's draw callback.
struct WindowContent {
    title: String,
    viewport: Viewport,
    scale: f64,
    style: StrokeStyle,
    segments: Rc<[Segment]>,
}

fn build_window(app: &gtk::Application, content: &WindowContent) {
    let segments = Rc::clone(&content.segments);
    let style = content.style;
    let scale = content.scale;

    let drawing_area = gtk::DrawingArea::new();
    drawing_area.set_hexpand(true);
    drawing_area.set_vexpand(true);
    drawing_area.set_draw_func(move |_widget, context, width, height| {
        if width <= 0 || height <= 0 {
            return;
        }
        let Ok(transform) = CanvasTransform::new(Viewport::new(width as u32, height as u32), scale)
        else {
            return;
        };
        if let Err(err) = paint_background(context, style.background) {
            warn!(error = %err, "window background paint failed");
            return;
        }
        for segment in segments.iter() {
            if let Err(err) = stroke_segment(context, transform, &style, *segment) {
                warn!(error = %err, "window segment paint failed");
                return;
            }
        }
    });

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title(content.title.as_str())
        .default_width(i32::try_from(content.viewport.width).unwrap_or(i32::MAX))
        .default_height(i32::try_from(content.viewport.height).unwrap_or(i32::MAX))
        .build();
    window.set_child(Some(&drawing_area));
    window.present();
}

impl DrawingSurface for GtkWindowSurface {
    fn begin(&mut self, style: &StrokeStyle) -> TurtleResult<()> {
        style.validate()?;
        self.style = *style;
        self.segments.clear();
        Ok(())
    }

    fn draw_segment(&mut self, segment: Segment) -> TurtleResult<()> {
        self.segments.push(segment);
        Ok(())
    }

    fn present(&mut self) -> TurtleResult<()> {
        let app = gtk::Application::builder()
            .application_id(APPLICATION_ID)
            .flags(gtk::gio::ApplicationFlags::NON_UNIQUE)
            .build();

        let content = WindowContent {
            title: self.title.clone(),
            viewport: self.transform.viewport(),
            scale: self.transform.scale(),
            style: self.style,
            segments: self.segments.clone().into(),
        };
        app.connect_activate(move |app| build_window(app, &content));

        debug!(segments = self.segments.len(), "window opened");
        // Process arguments belong to the host, not to GTK.
        let exit_code = app.run_with_args::<&str>(&[]);
        debug!(?exit_code, "window closed");
        Ok(())
    }
}
