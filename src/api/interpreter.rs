use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{Command, Cursor};
use crate::error::TurtleResult;
use crate::render::DrawingSurface;

use super::TurtleConfig;

/// Diagnostics of one completed render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOutcome {
    /// Cursor after the last symbol.
    pub cursor: Cursor,
    pub segments_drawn: usize,
    /// Forward steps, drawn or not.
    pub moves: usize,
    pub turns: usize,
    pub ignored_symbols: usize,
    /// `]` symbols met with nothing saved.
    pub unmatched_pops: usize,
}

impl RenderOutcome {
    fn new(cursor: Cursor) -> Self {
        Self {
            cursor,
            segments_drawn: 0,
            moves: 0,
            turns: 0,
            ignored_symbols: 0,
            unmatched_pops: 0,
        }
    }
}

/// Turtle interpreter bound to one drawing surface.
///
/// The surface is owned for the interpreter's whole lifetime and handed back
/// by `into_surface`. Each `render` starts from a fresh cursor.
pub struct Interpreter<S: DrawingSurface> {
    surface: S,
    config: TurtleConfig,
}

impl<S: DrawingSurface> Interpreter<S> {
    pub fn new(surface: S, config: TurtleConfig) -> TurtleResult<Self> {
        config.validate()?;
        Ok(Self { surface, config })
    }

    #[must_use]
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TurtleConfig) -> TurtleResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Interprets `commands` left to right and draws onto the surface.
    ///
    /// Unknown symbols are skipped. Surface failures abort the render and are
    /// returned as is.
    pub fn render(&mut self, commands: &str) -> TurtleResult<RenderOutcome> {
        let params = self.config.params;
        let symbol_set = self.config.symbol_set;
        let mut cursor = Cursor::new(params.start, params.heading);
        let mut saved: SmallVec<[Cursor; 16]> = SmallVec::new();
        let mut outcome = RenderOutcome::new(cursor);

        debug!(
            len = commands.len(),
            step = params.step,
            delta = params.delta,
            heading = cursor.heading,
            ?symbol_set,
            "render start"
        );
        self.surface.begin(&self.config.style)?;

        for symbol in commands.chars() {
            let Some(command) = Command::from_symbol(symbol, symbol_set) else {
                trace!(%symbol, "ignored symbol");
                outcome.ignored_symbols += 1;
                continue;
            };

            match command {
                Command::Push => saved.push(cursor),
                Command::Pop => match saved.pop() {
                    Some(restored) => cursor = restored,
                    None => {
                        warn!("pop with no saved cursor");
                        outcome.unmatched_pops += 1;
                    }
                },
                Command::Forward | Command::Move | Command::TurnLeft | Command::TurnRight => {
                    let (next, segment) = cursor.apply(command, params.step, params.delta);
                    if let Some(segment) = segment {
                        self.surface.draw_segment(segment)?;
                        outcome.segments_drawn += 1;
                    }
                    if matches!(command, Command::TurnLeft | Command::TurnRight) {
                        outcome.turns += 1;
                    } else {
                        outcome.moves += 1;
                    }
                    cursor = next;
                }
            }
        }

        self.surface.present()?;
        outcome.cursor = cursor;
        debug!(
            segments = outcome.segments_drawn,
            ignored = outcome.ignored_symbols,
            x = cursor.position.x,
            y = cursor.position.y,
            heading = cursor.heading,
            "render done"
        );
        Ok(outcome)
    }
}
