pub mod command;
pub mod cursor;
pub mod types;

pub use command::{Command, SymbolSet};
pub use cursor::{Cursor, normalize_heading};
pub use types::{Point, Segment, Viewport};
