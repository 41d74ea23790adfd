//! Deterministic snapshot generation
//!
//! Snapshots capture the buffer state in a serializable format for testing
//! and debugging. Given the same sequence of actions, the adapter must
//! produce identical snapshots.

use serde::{Deserialize, Serialize};

use super::attr::TextAttribute;
use super::buffer::TextBuffer;
use super::color::Color;
use super::cursor::Point;
use super::screen::ScreenBuffer;

/// A complete snapshot of the buffer state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Buffer dimensions
    pub cols: usize,
    pub rows: usize,
    /// Row text, trailing blanks trimmed
    pub text: Vec<String>,
    /// Runs of non-default attributes, row by row
    pub styles: Vec<StyleRun>,
    /// Absolute cursor position
    pub cursor: Point,
    /// Attribute register at capture time
    pub current_attr: StyleSnapshot,
    /// Window title
    pub title: String,
    /// Lines scrolled off the top
    pub scrolled_lines: usize,
}

/// Consecutive cells of one row sharing a non-default attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRun {
    pub row: usize,
    pub col: usize,
    pub len: usize,
    pub style: StyleSnapshot,
}

/// Snapshot of a text attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleSnapshot {
    pub fg: Color,
    pub bg: Color,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reverse: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl From<&TextAttribute> for StyleSnapshot {
    fn from(attr: &TextAttribute) -> Self {
        StyleSnapshot {
            fg: attr.foreground,
            bg: attr.background,
            bold: attr.is_bold(),
            underline: attr.is_underlined(),
            reverse: attr.is_reverse_video(),
        }
    }
}

impl Snapshot {
    /// Create a snapshot from the current buffer state
    pub fn from_buffer(buffer: &ScreenBuffer, title: &str) -> Self {
        let mut styles = Vec::new();
        for (row, line) in buffer.lines().iter().enumerate() {
            let mut current: Option<StyleRun> = None;
            for (col, cell) in line.cells().iter().enumerate() {
                if cell.attr == TextAttribute::default() {
                    styles.extend(current.take());
                    continue;
                }
                let style = StyleSnapshot::from(&cell.attr);
                match current.as_mut() {
                    Some(run) if run.style == style => run.len += 1,
                    _ => {
                        styles.extend(current.take());
                        current = Some(StyleRun {
                            row,
                            col,
                            len: 1,
                            style,
                        });
                    }
                }
            }
            styles.extend(current);
        }

        Snapshot {
            cols: buffer.cols(),
            rows: buffer.rows(),
            text: buffer.lines().iter().map(|line| line.text()).collect(),
            styles,
            cursor: buffer.cursor().position(),
            current_attr: StyleSnapshot::from(&buffer.current_attributes()),
            title: title.to_string(),
            scrolled_lines: buffer.scrolled_lines(),
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
