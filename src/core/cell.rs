//! Terminal Cell
//!
//! Represents a single cell in the buffer grid: one glyph and the
//! attribute it was written with.

use super::attr::TextAttribute;

/// A single cell in the terminal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The glyph in this cell
    pub ch: char,
    /// Colors and flags the glyph is drawn with
    pub attr: TextAttribute,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(TextAttribute::default())
    }
}

impl Cell {
    /// Glyph used for erased cells
    pub const BLANK: char = ' ';

    pub fn new(ch: char, attr: TextAttribute) -> Self {
        Self { ch, attr }
    }

    /// A blank cell carrying `attr`, as left behind by erase operations
    pub fn blank(attr: TextAttribute) -> Self {
        Self {
            ch: Self::BLANK,
            attr,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.ch == Self::BLANK
    }
}
