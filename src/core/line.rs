//! Terminal line representation
//!
//! A line represents a row of cells in the buffer grid.

use super::cell::Cell;

/// A row of cells in the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The cells in this line
    cells: Vec<Cell>,
}

impl Line {
    /// Create a new line of blank default cells
    pub fn new(cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); cols],
        }
    }

    /// Get the number of columns in this line
    pub fn cols(&self) -> usize {
        self.cells.len()
    }

    /// Get a reference to a cell at the given column
    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Get a mutable reference to a cell at the given column
    pub fn cell_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(col)
    }

    /// Get all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrite cells from `col` with the items of `cells`, stopping at the
    /// end of the line. Returns how many cells were written.
    pub fn fill_from<I>(&mut self, col: usize, cells: I) -> usize
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut written = 0;
        for (slot, cell) in self.cells.iter_mut().skip(col).zip(cells) {
            *slot = cell;
            written += 1;
        }
        written
    }

    /// Glyphs of the line as a string, trailing blanks trimmed
    pub fn text(&self) -> String {
        let text: String = self.cells.iter().map(|cell| cell.ch).collect();
        text.trim_end_matches(Cell::BLANK).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextAttribute;

    #[test]
    fn test_line_new() {
        let line = Line::new(80);
        assert_eq!(line.cols(), 80);
        assert!(line.cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn test_fill_from_stops_at_edge() {
        let mut line = Line::new(10);
        let filled = line.fill_from(7, std::iter::repeat(Cell::new('x', TextAttribute::default())));
        assert_eq!(filled, 3);
        assert_eq!(line.text(), "       xxx");
    }

    #[test]
    fn test_fill_from_past_end() {
        let mut line = Line::new(4);
        assert_eq!(line.fill_from(9, [Cell::default()]), 0);
    }

    #[test]
    fn test_text_trims_trailing_blanks() {
        let mut line = Line::new(8);
        line.fill_from(0, "ab".chars().map(|c| Cell::new(c, TextAttribute::default())));
        assert_eq!(line.text(), "ab");
    }
}
