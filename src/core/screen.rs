//! In-memory screen buffer
//!
//! `ScreenBuffer` is the crate's reference [`TextBuffer`]: a fixed-size grid
//! of lines with a cursor and a current-attribute register. The write path
//! is small: printable glyphs advance the cursor and wrap at
//! the right edge, CR/LF/BS move it, and output past the last row scrolls
//! the top line away.

use super::attr::TextAttribute;
use super::buffer::{CellRun, TextBuffer};
use super::cell::Cell;
use super::cursor::{Cursor, Point};
use super::line::Line;
use super::viewport::Viewport;
use crate::error::BufferError;

/// The main buffer structure
#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
    /// Grid content, top row first
    lines: Vec<Line>,
    cursor: Cursor,
    /// Attribute applied to the next written or erased cell
    current_attr: TextAttribute,
    /// Lines scrolled off the top since creation
    scrolled_lines: usize,
}

impl ScreenBuffer {
    /// Create a new buffer with the given dimensions
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            lines: (0..rows).map(|_| Line::new(cols)).collect(),
            cursor: Cursor::new(),
            current_attr: TextAttribute::default(),
            scrolled_lines: 0,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn scrolled_lines(&self) -> usize {
        self.scrolled_lines
    }

    /// Viewport covering the whole buffer
    pub fn full_viewport(&self) -> Viewport {
        Viewport::new(
            Point::ORIGIN,
            u16::try_from(self.cols).unwrap_or(u16::MAX),
            u16::try_from(self.rows).unwrap_or(u16::MAX),
        )
    }

    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Cell at an absolute position, if in bounds
    pub fn cell(&self, position: Point) -> Option<&Cell> {
        let (col, row) = self.index(position)?;
        self.lines[row].cell(col)
    }

    /// Text of one row, trailing blanks trimmed
    pub fn row_text(&self, row: usize) -> String {
        self.line(row).map(Line::text).unwrap_or_default()
    }

    /// Convert an absolute position to grid indices
    fn index(&self, position: Point) -> Option<(usize, usize)> {
        let col = usize::try_from(position.x).ok()?;
        let row = usize::try_from(position.y).ok()?;
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    fn out_of_bounds(&self, position: Point) -> BufferError {
        BufferError::OutOfBounds {
            position,
            width: self.cols,
            height: self.rows,
        }
    }

    fn cols_i32(&self) -> i32 {
        i32::try_from(self.cols).unwrap_or(i32::MAX)
    }

    fn rows_i32(&self) -> i32 {
        i32::try_from(self.rows).unwrap_or(i32::MAX)
    }

    /// Scroll the grid up by one line, dropping the top line
    fn scroll_up(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.remove(0);
        self.lines.push(Line::new(self.cols));
        self.scrolled_lines += 1;
        tracing::debug!(scrolled = self.scrolled_lines, "buffer scrolled");
    }

    /// Keep the cursor row inside the grid by scrolling
    fn settle_cursor_row(&mut self) {
        let mut pos = self.cursor.position();
        while pos.y >= self.rows_i32() && self.rows > 0 {
            self.scroll_up();
            pos.y -= 1;
        }
        self.cursor.set_position(pos);
    }

    fn line_feed(&mut self) {
        let pos = self.cursor.position();
        self.cursor.set_position(Point::new(pos.x, pos.y + 1));
        self.settle_cursor_row();
    }

    fn put_glyph(&mut self, ch: char) {
        let cell = Cell::new(ch, self.current_attr);
        if let Some((col, row)) = self.index(self.cursor.position()) {
            if let Some(slot) = self.lines[row].cell_mut(col) {
                *slot = cell;
            }
        }
        let cols = self.cols_i32();
        if self.cursor.advance(cols) {
            self.settle_cursor_row();
        }
    }
}

impl TextBuffer for ScreenBuffer {
    fn current_attributes(&self) -> TextAttribute {
        self.current_attr
    }

    fn set_current_attributes(&mut self, attr: TextAttribute) {
        self.current_attr = attr;
    }

    fn cursor_position(&self) -> Point {
        self.cursor.position()
    }

    fn set_cursor_position(&mut self, position: Point) -> Result<(), BufferError> {
        if self.index(position).is_none() {
            tracing::warn!(%position, "cursor position rejected");
            return Err(self.out_of_bounds(position));
        }
        self.cursor.set_position(position);
        Ok(())
    }

    fn write_run(&mut self, run: CellRun, at: Point) -> Result<Point, BufferError> {
        let Some((col, row)) = self.index(at) else {
            return Err(self.out_of_bounds(at));
        };
        let written = self.lines[row].fill_from(col, run);
        let written = i32::try_from(written).unwrap_or(i32::MAX);
        Ok(Point::new(at.x + written, at.y))
    }

    fn write_text(&mut self, text: &str) -> Result<(), BufferError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(BufferError::Unsupported(
                "write to an empty buffer".to_string(),
            ));
        }
        let cols = self.cols_i32();
        for ch in text.chars() {
            match ch {
                '\r' => self.cursor.carriage_return(),
                '\n' => self.line_feed(),
                '\x08' => self.cursor.retreat(cols),
                c if c.is_control() => {
                    tracing::trace!(code = c as u32, "control character ignored");
                }
                c => self.put_glyph(c),
            }
        }
        Ok(())
    }
}
