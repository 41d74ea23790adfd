//! Action capability set
//!
//! [`TerminalApi`] is what the upstream escape-sequence interpreter drives:
//! one method per decoded action, invoked synchronously in decode order.
//! Every method reports a `Result` so the interpreter can abort a sequence
//! when the buffer behind the adapter fails.

use crate::core::{Color, Point};
use crate::error::Result;

/// Trait implemented by consumers of decoded terminal actions.
pub trait TerminalApi {
    /// Write a run of literal text at the cursor.
    fn print_string(&mut self, text: &str) -> Result<()>;

    /// Write a single character; same effect as `print_string` on a
    /// one-character string.
    fn execute_char(&mut self, ch: char) -> Result<()>;

    /// Reset the requested color channels to their defaults (SGR 39/49).
    fn set_text_to_defaults(&mut self, foreground: bool, background: bool) -> Result<()>;

    /// Set the foreground to a palette index (SGR 30-37, 90-97, 38;5).
    fn set_text_foreground_index(&mut self, index: u8) -> Result<()>;

    /// Set the background to a palette index (SGR 40-47, 100-107, 48;5).
    fn set_text_background_index(&mut self, index: u8) -> Result<()>;

    /// Set one channel to a direct color (SGR 38;2 / 48;2).
    fn set_text_rgb_color(&mut self, color: Color, foreground: bool) -> Result<()>;

    fn bold_text(&mut self, on: bool) -> Result<()>;

    fn underline_text(&mut self, on: bool) -> Result<()>;

    fn reverse_text(&mut self, on: bool) -> Result<()>;

    /// Move the cursor to viewport-relative `(x, y)` (CUP), clamped to the
    /// viewport.
    fn set_cursor_position(&mut self, x: i32, y: i32) -> Result<()>;

    /// Viewport-relative cursor position.
    fn cursor_position(&self) -> Point;

    /// Blank up to `count` cells from the cursor rightward (ECH).
    fn erase_characters(&mut self, count: u32) -> Result<()>;

    /// Set the window title (OSC 0/2).
    fn set_window_title(&mut self, title: &str) -> Result<()>;
}
