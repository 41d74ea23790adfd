//! Buffer capability set
//!
//! [`TextBuffer`] is the storage side of the adapter: it owns the cells,
//! the cursor and the current-attribute register. The adapter reaches it
//! through this trait only, so any storage engine (or a test double) can
//! sit behind it.

use std::iter::FusedIterator;

use super::attr::TextAttribute;
use super::cell::Cell;
use super::cursor::Point;
use crate::error::BufferError;

/// Storage primitives consumed by the adapter
pub trait TextBuffer {
    /// Attribute applied to the next written or erased cell
    fn current_attributes(&self) -> TextAttribute;

    fn set_current_attributes(&mut self, attr: TextAttribute);

    /// Absolute cursor position
    fn cursor_position(&self) -> Point;

    /// Move the cursor to an absolute position. Implementations reject
    /// positions outside their storage.
    fn set_cursor_position(&mut self, position: Point) -> Result<(), BufferError>;

    /// Write a run of cells starting at `at`, without moving the cursor.
    /// Returns the position just past the last written cell.
    fn write_run(&mut self, run: CellRun, at: Point) -> Result<Point, BufferError>;

    /// Write text at the cursor with the current attribute, advancing the
    /// cursor as the buffer's write policy dictates.
    fn write_text(&mut self, text: &str) -> Result<(), BufferError>;
}

impl<B: TextBuffer + ?Sized> TextBuffer for &mut B {
    fn current_attributes(&self) -> TextAttribute {
        (**self).current_attributes()
    }

    fn set_current_attributes(&mut self, attr: TextAttribute) {
        (**self).set_current_attributes(attr)
    }

    fn cursor_position(&self) -> Point {
        (**self).cursor_position()
    }

    fn set_cursor_position(&mut self, position: Point) -> Result<(), BufferError> {
        (**self).set_cursor_position(position)
    }

    fn write_run(&mut self, run: CellRun, at: Point) -> Result<Point, BufferError> {
        (**self).write_run(run, at)
    }

    fn write_text(&mut self, text: &str) -> Result<(), BufferError> {
        (**self).write_text(text)
    }
}

impl<B: TextBuffer + ?Sized> TextBuffer for Box<B> {
    fn current_attributes(&self) -> TextAttribute {
        (**self).current_attributes()
    }

    fn set_current_attributes(&mut self, attr: TextAttribute) {
        (**self).set_current_attributes(attr)
    }

    fn cursor_position(&self) -> Point {
        (**self).cursor_position()
    }

    fn set_cursor_position(&mut self, position: Point) -> Result<(), BufferError> {
        (**self).set_cursor_position(position)
    }

    fn write_run(&mut self, run: CellRun, at: Point) -> Result<Point, BufferError> {
        (**self).write_run(run, at)
    }

    fn write_text(&mut self, text: &str) -> Result<(), BufferError> {
        (**self).write_text(text)
    }
}

/// One fill cell repeated a fixed number of times.
///
/// Erase operations hand a single `CellRun` to the buffer instead of
/// writing cells one by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRun {
    cell: Cell,
    remaining: usize,
}

impl CellRun {
    pub fn new(cell: Cell, count: usize) -> Self {
        Self {
            cell,
            remaining: count,
        }
    }

    /// The repeated cell
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

impl Iterator for CellRun {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CellRun {}

impl FusedIterator for CellRun {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_run_yields_count() {
        let run = CellRun::new(Cell::default(), 3);
        assert_eq!(run.len(), 3);
        assert_eq!(run.collect::<Vec<_>>(), vec![Cell::default(); 3]);
    }

    #[test]
    fn test_empty_run() {
        let mut run = CellRun::new(Cell::default(), 0);
        assert_eq!(run.len(), 0);
        assert_eq!(run.next(), None);
        assert_eq!(run.next(), None);
    }
}
