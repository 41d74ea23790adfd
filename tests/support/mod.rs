//! Test doubles shared by the integration tests

#![allow(dead_code)]

use term_adapter::core::{Cell, CellRun, Point, TextAttribute, TextBuffer};
use term_adapter::BufferError;

/// One bulk write observed by the fake buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunWrite {
    pub cell: Cell,
    pub count: usize,
    pub at: Point,
}

/// Buffer double that records every call and stores nothing but the
/// cursor and attribute register
#[derive(Debug, Default)]
pub struct RecordingBuffer {
    pub attr: TextAttribute,
    pub cursor: Point,
    pub attr_writes: usize,
    pub runs: Vec<RunWrite>,
    pub texts: Vec<String>,
    /// When set, every fallible call fails with this error
    pub fail_with: Option<BufferError>,
}

impl RecordingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(cursor: Point) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    pub fn failing(error: BufferError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), BufferError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl TextBuffer for RecordingBuffer {
    fn current_attributes(&self) -> TextAttribute {
        self.attr
    }

    fn set_current_attributes(&mut self, attr: TextAttribute) {
        self.attr_writes += 1;
        self.attr = attr;
    }

    fn cursor_position(&self) -> Point {
        self.cursor
    }

    fn set_cursor_position(&mut self, position: Point) -> Result<(), BufferError> {
        self.check()?;
        self.cursor = position;
        Ok(())
    }

    fn write_run(&mut self, run: CellRun, at: Point) -> Result<Point, BufferError> {
        self.check()?;
        let cell = run.cell();
        let count = run.len();
        self.runs.push(RunWrite { cell, count, at });
        Ok(Point::new(at.x + count as i32, at.y))
    }

    fn write_text(&mut self, text: &str) -> Result<(), BufferError> {
        self.check()?;
        self.texts.push(text.to_string());
        Ok(())
    }
}
