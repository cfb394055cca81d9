//! `turtle_render`: draw a turtle command string in a window, a PNG file or
//! as JSON segments.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::info;

use turtle_rs::api::{DEMO_COMMANDS, Interpreter, RenderOutcome, TurtleConfig};
use turtle_rs::core::{Point, Segment, SymbolSet};
use turtle_rs::render::RecordingSurface;
use turtle_rs::telemetry::init_default_tracing;
use turtle_rs::{TurtleError, TurtleResult};

#[derive(Parser)]
#[command(version, about = "Turtle-graphics interpreter for L-system command strings")]
struct Cli {
    /// Command string over F, f, + and - (defaults to the demonstration drawing)
    #[arg(allow_hyphen_values = true)]
    commands: Option<String>,

    /// Step length of F and f
    #[arg(long, allow_hyphen_values = true)]
    step: Option<f64>,

    /// Turn angle of + and - in degrees
    #[arg(long, allow_hyphen_values = true)]
    delta: Option<f64>,

    /// Initial heading in degrees (90 faces up)
    #[arg(long, allow_hyphen_values = true)]
    heading: Option<f64>,

    /// Start x coordinate
    #[arg(long, allow_hyphen_values = true)]
    start_x: Option<f64>,

    /// Start y coordinate
    #[arg(long, allow_hyphen_values = true)]
    start_y: Option<f64>,

    /// Recognize [ and ] as save and restore of the cursor
    #[arg(long)]
    bracketed: bool,

    /// JSON config file; explicit flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render offscreen and write a PNG file instead of opening a window
    #[arg(long, value_name = "FILE", conflicts_with = "json")]
    png: Option<PathBuf>,

    /// Print the drawn segments as JSON instead of opening a window
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    commands: &'a str,
    segments: &'a [Segment],
    position: Point,
    heading: f64,
    ignored_symbols: usize,
}

fn main() -> ExitCode {
    let _ = init_default_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> TurtleResult<()> {
    let config = resolve_config(cli)?;
    let commands = cli.commands.as_deref().unwrap_or(DEMO_COMMANDS);

    if cli.json {
        return print_json(commands, config);
    }
    if let Some(path) = &cli.png {
        return write_png(commands, config, path);
    }
    show_window(commands, config)
}

fn resolve_config(cli: &Cli) -> TurtleResult<TurtleConfig> {
    let mut config = match (&cli.config, &cli.commands) {
        (Some(path), _) => TurtleConfig::from_json_str(&fs::read_to_string(path)?)?,
        (None, None) => TurtleConfig::demo(),
        (None, Some(_)) => TurtleConfig::default(),
    };

    let params = &mut config.params;
    if let Some(step) = cli.step {
        params.step = step;
    }
    if let Some(delta) = cli.delta {
        params.delta = delta;
    }
    if let Some(heading) = cli.heading {
        params.heading = heading;
    }
    if let Some(x) = cli.start_x {
        params.start.x = x;
    }
    if let Some(y) = cli.start_y {
        params.start.y = y;
    }
    if cli.bracketed {
        config.symbol_set = SymbolSet::Bracketed;
    }
    Ok(config)
}

fn log_outcome(outcome: &RenderOutcome) {
    info!(
        segments = outcome.segments_drawn,
        ignored = outcome.ignored_symbols,
        x = outcome.cursor.position.x,
        y = outcome.cursor.position.y,
        heading = outcome.cursor.heading,
        "rendered"
    );
}

fn print_json(commands: &str, config: TurtleConfig) -> TurtleResult<()> {
    let mut interpreter = Interpreter::new(RecordingSurface::default(), config)?;
    let outcome = interpreter.render(commands)?;
    log_outcome(&outcome);

    let surface = interpreter.into_surface();
    let report = JsonReport {
        commands,
        segments: surface.segments(),
        position: outcome.cursor.position,
        heading: outcome.cursor.heading,
        ignored_symbols: outcome.ignored_symbols,
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| TurtleError::InvalidData(format!("failed to serialize segments: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(commands: &str, config: TurtleConfig, path: &Path) -> TurtleResult<()> {
    use turtle_rs::render::CairoSurface;

    let surface = CairoSurface::new(config.viewport, config.scale)?.with_png_output(path);
    let mut interpreter = Interpreter::new(surface, config)?;
    let outcome = interpreter.render(commands)?;
    log_outcome(&outcome);
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(_commands: &str, _config: TurtleConfig, path: &Path) -> TurtleResult<()> {
    Err(TurtleError::Surface(format!(
        "cannot write {}: built without the `cairo-backend` feature",
        path.display()
    )))
}

#[cfg(feature = "gtk4-adapter")]
fn show_window(commands: &str, config: TurtleConfig) -> TurtleResult<()> {
    use turtle_rs::platform_gtk::GtkWindowSurface;

    let surface = GtkWindowSurface::new("turtle-rs", config.viewport, config.scale)?;
    let mut interpreter = Interpreter::new(surface, config)?;
    let outcome = interpreter.render(commands)?;
    log_outcome(&outcome);
    Ok(())
}

#[cfg(not(feature = "gtk4-adapter"))]
fn show_window(commands: &str, config: TurtleConfig) -> TurtleResult<()> {
    tracing::warn!("built without the `gtk4-adapter` feature, printing segments instead");
    print_json(commands, config)
}
