mod interpreter;
mod render_params;
mod turtle_config;
mod validation;

pub use interpreter::{Interpreter, RenderOutcome};
pub use render_params::RenderParams;
pub use turtle_config::{DEMO_COMMANDS, TurtleConfig};
