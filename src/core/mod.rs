//! Terminal Core Module
//!
//! The buffer-side model the adapter works against:
//! - Colors and text attributes
//! - Cells, lines and the in-memory screen buffer
//! - Cursor positions and viewport geometry
//! - The `TextBuffer` capability set and deterministic snapshots

mod attr;
mod buffer;
mod cell;
mod color;
mod cursor;
mod line;
mod screen;
mod snapshot;
mod viewport;

pub use attr::{MetaFlags, TextAttribute};
pub use buffer::{CellRun, TextBuffer};
pub use cell::Cell;
pub use color::Color;
pub use cursor::{Cursor, Point};
pub use line::Line;
pub use screen::ScreenBuffer;
pub use snapshot::{Snapshot, StyleRun, StyleSnapshot};
pub use viewport::{Viewport, ViewportSource};
