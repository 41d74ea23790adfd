//! Text attributes
//!
//! A [`TextAttribute`] is the rendering state applied to a cell: one color
//! per channel, boldness, and a set of meta flags. Every setter touches
//! exactly one of these and leaves the rest alone, so the adapter can apply
//! SGR-style changes as read-modify-write on the buffer's current attribute.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::color::Color;

bitflags! {
    /// Meta attribute bits layered on top of the colors.
    ///
    /// Bit positions follow the console LVB layout so packed values coming
    /// from legacy hosts can be used directly.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MetaFlags: u16 {
        const GRID_HORIZONTAL = 0x0400;
        const GRID_LVERTICAL  = 0x0800;
        const GRID_RVERTICAL  = 0x1000;
        const REVERSE_VIDEO   = 0x4000;
        const UNDERSCORE      = 0x8000;
    }
}

/// Colors, boldness and meta flags of a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextAttribute {
    pub foreground: Color,
    pub background: Color,
    pub bold: bool,
    pub meta: MetaFlags,
}

impl TextAttribute {
    /// Create an attribute with the given colors and no meta flags
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            ..Default::default()
        }
    }

    pub fn set_default_foreground(&mut self) {
        self.foreground = Color::Default;
    }

    pub fn set_default_background(&mut self) {
        self.background = Color::Default;
    }

    /// Set palette indices for the channels that are `Some`.
    /// A `None` channel keeps its current value, indexed or not.
    pub fn set_indexed_attributes(&mut self, foreground: Option<u8>, background: Option<u8>) {
        if let Some(index) = foreground {
            self.foreground = Color::indexed(index);
        }
        if let Some(index) = background {
            self.background = Color::indexed(index);
        }
    }

    /// Set one channel to an arbitrary color
    pub fn set_color(&mut self, color: Color, foreground: bool) {
        if foreground {
            self.foreground = color;
        } else {
            self.background = color;
        }
    }

    pub fn embolden(&mut self) {
        self.bold = true;
    }

    pub fn debolden(&mut self) {
        self.bold = false;
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn meta_attributes(&self) -> MetaFlags {
        self.meta
    }

    /// Replace the whole meta flag set. Colors and boldness are kept.
    pub fn set_meta_attributes(&mut self, meta: MetaFlags) {
        self.meta = meta;
    }

    pub fn is_underlined(&self) -> bool {
        self.meta.contains(MetaFlags::UNDERSCORE)
    }

    pub fn is_reverse_video(&self) -> bool {
        self.meta.contains(MetaFlags::REVERSE_VIDEO)
    }
}
