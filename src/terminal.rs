//! Terminal action adapter
//!
//! Applies decoded actions to a screen buffer. This is the integration
//! point between the interpreter's view of the protocol and the buffer's
//! state: it translates viewport-relative coordinates to buffer-absolute
//! ones, merges attribute changes into the current attribute, and keeps
//! erasure inside the viewport.

use std::fmt;

use crate::api::TerminalApi;
use crate::core::{
    Cell, CellRun, Color, MetaFlags, Point, TextAttribute, TextBuffer, Viewport, ViewportSource,
};
use crate::error::{Error, Result};
use crate::title::WindowTitle;

/// Action adapter over a buffer `B` and a viewport source `V`
pub struct Terminal<B, V = Viewport> {
    buffer: B,
    viewport: V,
    title: WindowTitle,
}

impl<B: TextBuffer, V: ViewportSource> Terminal<B, V> {
    /// Create an adapter over the given buffer and viewport
    pub fn new(buffer: B, viewport: V) -> Self {
        Self {
            buffer,
            viewport,
            title: WindowTitle::default(),
        }
    }

    /// Seed the cached title without notifying anyone
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = WindowTitle::new(title);
        self
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    pub fn into_buffer(self) -> B {
        self.buffer
    }

    /// The viewport as currently reported by the source
    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    pub fn title(&self) -> &str {
        self.title.get()
    }

    /// Register the title observer. Last registration wins.
    pub fn set_title_changed_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.title.set_callback(Box::new(callback));
    }

    pub fn clear_title_changed_callback(&mut self) {
        self.title.take_callback();
    }

    /// Read the current attribute, apply one change, write it back
    fn update_attributes(&mut self, change: impl FnOnce(&mut TextAttribute)) -> Result<()> {
        let mut attr = self.buffer.current_attributes();
        change(&mut attr);
        self.buffer.set_current_attributes(attr);
        Ok(())
    }
}

impl<B: TextBuffer, V: ViewportSource> TerminalApi for Terminal<B, V> {
    fn print_string(&mut self, text: &str) -> Result<()> {
        tracing::trace!(len = text.len(), "print string");
        self.buffer
            .write_text(text)
            .map_err(Error::buffer("print_string"))
    }

    fn execute_char(&mut self, ch: char) -> Result<()> {
        let mut utf8 = [0u8; 4];
        self.buffer
            .write_text(ch.encode_utf8(&mut utf8))
            .map_err(Error::buffer("execute_char"))
    }

    fn set_text_to_defaults(&mut self, foreground: bool, background: bool) -> Result<()> {
        self.update_attributes(|attr| {
            if foreground {
                attr.set_default_foreground();
            }
            if background {
                attr.set_default_background();
            }
        })
    }

    fn set_text_foreground_index(&mut self, index: u8) -> Result<()> {
        self.update_attributes(|attr| attr.set_indexed_attributes(Some(index), None))
    }

    fn set_text_background_index(&mut self, index: u8) -> Result<()> {
        self.update_attributes(|attr| attr.set_indexed_attributes(None, Some(index)))
    }

    fn set_text_rgb_color(&mut self, color: Color, foreground: bool) -> Result<()> {
        self.update_attributes(|attr| attr.set_color(color, foreground))
    }

    fn bold_text(&mut self, on: bool) -> Result<()> {
        self.update_attributes(|attr| {
            if on {
                attr.embolden();
            } else {
                attr.debolden();
            }
        })
    }

    fn underline_text(&mut self, on: bool) -> Result<()> {
        self.update_attributes(|attr| {
            let mut meta = attr.meta_attributes();
            meta.set(MetaFlags::UNDERSCORE, on);
            attr.set_meta_attributes(meta);
        })
    }

    fn reverse_text(&mut self, on: bool) -> Result<()> {
        self.update_attributes(|attr| {
            let mut meta = attr.meta_attributes();
            meta.set(MetaFlags::REVERSE_VIDEO, on);
            attr.set_meta_attributes(meta);
        })
    }

    fn set_cursor_position(&mut self, x: i32, y: i32) -> Result<()> {
        let viewport = self.viewport.viewport();
        let requested = viewport.origin() + Point::new(x, y);
        let absolute = viewport.clamp(requested);
        if absolute != requested {
            tracing::trace!(%requested, %absolute, "cursor position clamped to viewport");
        }
        self.buffer
            .set_cursor_position(absolute)
            .map_err(Error::buffer("set_cursor_position"))
    }

    // Not clamped: reports whatever the buffer holds.
    fn cursor_position(&self) -> Point {
        self.buffer.cursor_position() - self.viewport.viewport().origin()
    }

    fn erase_characters(&mut self, count: u32) -> Result<()> {
        let cursor = self.buffer.cursor_position();
        let viewport = self.viewport.viewport();
        let distance_to_right = viewport.right_exclusive().saturating_sub(cursor.x);
        let fill = count.min(u32::try_from(distance_to_right).unwrap_or(0)) as usize;
        tracing::trace!(count, fill, %cursor, "erase characters");
        if fill == 0 {
            return Ok(());
        }

        let run = CellRun::new(Cell::blank(self.buffer.current_attributes()), fill);
        self.buffer
            .write_run(run, cursor)
            .map_err(Error::buffer("erase_characters"))?;
        Ok(())
    }

    fn set_window_title(&mut self, title: &str) -> Result<()> {
        self.title.update(title);
        Ok(())
    }
}

impl<B: fmt::Debug, V: ViewportSource> fmt::Debug for Terminal<B, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminal")
            .field("buffer", &self.buffer)
            .field("viewport", &self.viewport.viewport())
            .field("title", &self.title)
            .finish()
    }
}
