use approx::assert_abs_diff_eq;
use turtle_rs::TurtleError;
use turtle_rs::api::{DEMO_COMMANDS, Interpreter, RenderParams, TurtleConfig};
use turtle_rs::core::{Point, Segment};
use turtle_rs::render::{DrawingSurface, NullSurface, RecordingSurface, StrokeStyle};

fn recording_interpreter(params: RenderParams) -> Interpreter<RecordingSurface> {
    Interpreter::new(RecordingSurface::default(), TurtleConfig::new(params)).expect("init")
}

fn assert_point_eq(actual: Point, x: f64, y: f64) {
    assert_abs_diff_eq!(actual.x, x, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.y, y, epsilon = 1e-9);
}

#[test]
fn single_forward_draws_one_segment_east() {
    let mut interpreter = recording_interpreter(RenderParams::new(10.0, 90.0).with_heading(0.0));

    let outcome = interpreter.render("F").expect("render");
    let segments = interpreter.surface().segments();

    assert_eq!(segments, &[Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))]);
    assert_eq!(outcome.cursor.position, Point::new(10.0, 0.0));
    assert_eq!(outcome.cursor.heading, 0.0);
}

#[test]
fn forward_turn_forward_draws_a_corner() {
    let mut interpreter = recording_interpreter(RenderParams::new(10.0, 90.0).with_heading(0.0));

    let outcome = interpreter.render("F+F").expect("render");
    let segments = interpreter.surface().segments();

    assert_eq!(segments.len(), 2);
    assert_point_eq(segments[0].from, 0.0, 0.0);
    assert_point_eq(segments[0].to, 10.0, 0.0);
    assert_point_eq(segments[1].from, 10.0, 0.0);
    assert_point_eq(segments[1].to, 10.0, 10.0);
    assert_eq!(outcome.cursor.heading, 90.0);
    assert_eq!(outcome.turns, 1);
}

#[test]
fn empty_commands_leave_cursor_at_start() {
    let params = RenderParams::new(10.0, 90.0)
        .with_start((3.0, -4.0))
        .with_heading(45.0);
    let mut interpreter = recording_interpreter(params);

    let outcome = interpreter.render("").expect("render");

    assert!(interpreter.surface().segments().is_empty());
    assert!(interpreter.surface().is_presented());
    assert_eq!(outcome.cursor.position, Point::new(3.0, -4.0));
    assert_eq!(outcome.cursor.heading, 45.0);
}

#[test]
fn lowercase_f_moves_without_drawing() {
    let mut interpreter = recording_interpreter(RenderParams::new(5.0, 90.0).with_heading(0.0));

    let outcome = interpreter.render("FfF").expect("render");
    let segments = interpreter.surface().segments();

    assert_eq!(segments.len(), 2);
    assert_point_eq(segments[1].from, 10.0, 0.0);
    assert_point_eq(segments[1].to, 15.0, 0.0);
    assert_point_eq(outcome.cursor.position, 15.0, 0.0);
    assert_eq!(outcome.moves, 3);
}

#[test]
fn consecutive_moves_never_draw() {
    let mut interpreter = recording_interpreter(RenderParams::new(5.0, 90.0).with_heading(90.0));

    let outcome = interpreter.render("ffff").expect("render");

    assert!(interpreter.surface().segments().is_empty());
    assert_point_eq(outcome.cursor.position, 0.0, 20.0);
}

#[test]
fn unknown_symbols_are_ignored_without_error() {
    let mut interpreter = recording_interpreter(RenderParams::new(10.0, 90.0).with_heading(0.0));

    let outcome = interpreter.render("XF Y[]-Gf\n").expect("render");

    assert_eq!(outcome.ignored_symbols, 7);
    assert_eq!(outcome.segments_drawn, 1);
    assert_eq!(outcome.cursor.heading, 270.0);
}

#[test]
fn demo_drawing_matches_expected_path() {
    let mut interpreter = recording_interpreter(RenderParams::demo());

    let outcome = interpreter.render(DEMO_COMMANDS).expect("render");
    let segments = interpreter.surface().segments();

    assert_eq!(segments.len(), 13);
    assert_point_eq(segments[0].from, 0.0, 0.0);
    assert_point_eq(segments[0].to, 0.0, 35.0);
    assert_point_eq(outcome.cursor.position, 140.0, 35.0);
    assert_eq!(outcome.cursor.heading, 270.0);
    for pair in segments.windows(2) {
        let gap = Segment::new(pair[0].to, pair[1].from).length();
        assert!(gap < 1e-9, "demo path is drawn without pen-up gaps");
    }
}

#[test]
fn zero_step_collapses_segments_to_points() {
    let mut interpreter = recording_interpreter(RenderParams::new(0.0, 90.0));

    let outcome = interpreter.render("FF").expect("render");

    assert_eq!(outcome.segments_drawn, 2);
    assert!(
        interpreter
            .surface()
            .segments()
            .iter()
            .all(|segment| segment.length() == 0.0)
    );
}

#[test]
fn non_finite_step_propagates_nan_position() {
    let mut interpreter = recording_interpreter(RenderParams::new(f64::NAN, 90.0));

    let outcome = interpreter.render("F").expect("render is not validated");

    assert!(outcome.cursor.position.x.is_nan());
    assert!(outcome.cursor.position.y.is_nan());
}

#[test]
fn heading_stays_in_half_open_range() {
    let mut interpreter = recording_interpreter(RenderParams::new(1.0, 135.0).with_heading(-10.0));

    let outcome = interpreter.render("+++++++---").expect("render");

    assert!((0.0..360.0).contains(&outcome.cursor.heading));
}

#[test]
fn recording_surface_receives_style_from_config() {
    let style = StrokeStyle::default().with_width(3.0);
    let config = TurtleConfig::default().with_style(style);
    let mut interpreter = Interpreter::new(RecordingSurface::default(), config).expect("init");

    interpreter.render("F").expect("render");

    assert_eq!(interpreter.surface().style(), Some(style));
}

#[test]
fn null_surface_counts_segments() {
    let mut interpreter =
        Interpreter::new(NullSurface::default(), TurtleConfig::demo()).expect("init");

    interpreter.render(DEMO_COMMANDS).expect("render");
    let surface = interpreter.into_surface();

    assert_eq!(surface.segment_count, 13);
    assert!(surface.presented);
}

#[derive(Default)]
struct FailingSurface {
    draws: usize,
    presented: bool,
}

impl DrawingSurface for FailingSurface {
    fn begin(&mut self, _style: &StrokeStyle) -> turtle_rs::TurtleResult<()> {
        Ok(())
    }

    fn draw_segment(&mut self, _segment: Segment) -> turtle_rs::TurtleResult<()> {
        self.draws += 1;
        if self.draws == 2 {
            return Err(TurtleError::Surface("display lost".to_owned()));
        }
        Ok(())
    }

    fn present(&mut self) -> turtle_rs::TurtleResult<()> {
        self.presented = true;
        Ok(())
    }
}

#[test]
fn surface_failure_aborts_render() {
    let mut interpreter =
        Interpreter::new(FailingSurface::default(), TurtleConfig::default()).expect("init");

    let err = interpreter.render("FFFF").expect_err("surface failure");
    let surface = interpreter.into_surface();

    assert!(matches!(err, TurtleError::Surface(_)));
    assert_eq!(surface.draws, 2);
    assert!(!surface.presented);
}

#[test]
fn interpreter_can_borrow_a_surface() {
    let mut surface = RecordingSurface::default();
    {
        let mut interpreter = Interpreter::new(&mut surface, TurtleConfig::default()).expect("init");
        interpreter.render("FF").expect("render");
    }

    assert_eq!(surface.segments().len(), 2);
}
