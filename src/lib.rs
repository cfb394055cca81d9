//! turtle-rs: turtle-graphics interpreter for L-system command strings.
//!
//! The interpreter scans a fully expanded command string (`F`, `f`, `+`, `-`)
//! and streams the resulting line segments into a pluggable drawing surface.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{Interpreter, RenderOutcome, RenderParams, TurtleConfig};
pub use error::{TurtleError, TurtleResult};
